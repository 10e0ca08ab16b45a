use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;
use validator::Validate;

use crate::domain::packaging::NewPackaging;
use crate::forms::IdsForm;
use crate::forms::medicine::{CreateMedicineForm, UpdateMedicineForm};
use crate::forms::packaging::BulkPackagingForm;
use crate::listing::ListRequest;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, medicine as service, packaging as packaging_service};

#[get("/medicines")]
pub async fn list_medicines(
    params: web::Query<ListRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = service::list_medicines(repo.as_ref(), &params)?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/medicines/{medicine_id}")]
pub async fn get_medicine(
    medicine_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let details = service::get_medicine(repo.as_ref(), medicine_id.into_inner())?;
    Ok(HttpResponse::Ok().json(details))
}

#[post("/medicines")]
pub async fn create_medicine(
    form: web::Json<CreateMedicineForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let medicine = service::create_medicine(repo.as_ref(), &(&*form).into())?;
    Ok(HttpResponse::Created().json(medicine))
}

#[put("/medicines/{medicine_id}")]
pub async fn update_medicine(
    medicine_id: web::Path<i32>,
    form: web::Json<UpdateMedicineForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let medicine =
        service::update_medicine(repo.as_ref(), medicine_id.into_inner(), &(&*form).into())?;
    Ok(HttpResponse::Ok().json(medicine))
}

#[delete("/medicines/{medicine_id}")]
pub async fn delete_medicine(
    medicine_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_medicine(repo.as_ref(), medicine_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/medicines/mass-destroy")]
pub async fn delete_medicines(
    form: web::Json<IdsForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let deleted = service::delete_medicines(repo.as_ref(), &form.ids)?;
    Ok(HttpResponse::Ok().json(json!({ "deleted": deleted })))
}

#[post("/medicines/{medicine_id}/packagings")]
pub async fn create_medicine_packagings(
    medicine_id: web::Path<i32>,
    form: web::Json<BulkPackagingForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let medicine_id = medicine_id.into_inner();
    let new_packagings: Vec<NewPackaging> = form
        .items
        .iter()
        .map(|packaging| packaging.into_new_packaging(medicine_id))
        .collect();

    let packagings =
        packaging_service::create_medicine_packagings(repo.as_ref(), medicine_id, &new_packagings)?;
    Ok(HttpResponse::Created().json(packagings))
}
