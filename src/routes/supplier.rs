use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::forms::supplier::SupplierForm;
use crate::listing::ListRequest;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, supplier as service};

#[get("/suppliers")]
pub async fn list_suppliers(
    params: web::Query<ListRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = service::list_suppliers(repo.as_ref(), &params)?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/suppliers/{supplier_id}")]
pub async fn get_supplier(
    supplier_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let supplier = service::get_supplier(repo.as_ref(), supplier_id.into_inner())?;
    Ok(HttpResponse::Ok().json(supplier))
}

#[post("/suppliers")]
pub async fn create_supplier(
    form: web::Json<SupplierForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let supplier = service::create_supplier(repo.as_ref(), &(&*form).into())?;
    Ok(HttpResponse::Created().json(supplier))
}

#[put("/suppliers/{supplier_id}")]
pub async fn update_supplier(
    supplier_id: web::Path<i32>,
    form: web::Json<SupplierForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let supplier =
        service::update_supplier(repo.as_ref(), supplier_id.into_inner(), &(&*form).into())?;
    Ok(HttpResponse::Ok().json(supplier))
}

#[delete("/suppliers/{supplier_id}")]
pub async fn delete_supplier(
    supplier_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_supplier(repo.as_ref(), supplier_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
