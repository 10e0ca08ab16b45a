use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::forms::dosage_form::DosageFormForm;
use crate::listing::ListRequest;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, dosage_form as service};

#[get("/dosage-forms")]
pub async fn list_dosage_forms(
    params: web::Query<ListRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = service::list_dosage_forms(repo.as_ref(), &params)?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/dosage-forms/{form_id}")]
pub async fn get_dosage_form(
    form_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let form = service::get_dosage_form(repo.as_ref(), form_id.into_inner())?;
    Ok(HttpResponse::Ok().json(form))
}

#[post("/dosage-forms")]
pub async fn create_dosage_form(
    form: web::Json<DosageFormForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let created = service::create_dosage_form(repo.as_ref(), &(&*form).into())?;
    Ok(HttpResponse::Created().json(created))
}

#[put("/dosage-forms/{form_id}")]
pub async fn update_dosage_form(
    form_id: web::Path<i32>,
    form: web::Json<DosageFormForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let updated =
        service::update_dosage_form(repo.as_ref(), form_id.into_inner(), &(&*form).into())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/dosage-forms/{form_id}")]
pub async fn delete_dosage_form(
    form_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_dosage_form(repo.as_ref(), form_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
