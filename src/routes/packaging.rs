use actix_web::{HttpResponse, delete, get, post, web};
use validator::Validate;

use crate::forms::packaging::CreatePackagingForm;
use crate::listing::ListRequest;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, packaging as service};

#[get("/packagings")]
pub async fn list_packagings(
    params: web::Query<ListRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = service::list_packagings(repo.as_ref(), &params)?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/packagings/{packaging_id}")]
pub async fn get_packaging(
    packaging_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let packaging = service::get_packaging(repo.as_ref(), packaging_id.into_inner())?;
    Ok(HttpResponse::Ok().json(packaging))
}

#[post("/packagings")]
pub async fn create_packaging(
    form: web::Json<CreatePackagingForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let packaging = service::create_packaging(repo.as_ref(), &(&*form).into())?;
    Ok(HttpResponse::Created().json(packaging))
}

#[delete("/packagings/{packaging_id}")]
pub async fn delete_packaging(
    packaging_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_packaging(repo.as_ref(), packaging_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
