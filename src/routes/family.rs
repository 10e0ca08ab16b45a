use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::forms::family::FamilyForm;
use crate::listing::ListRequest;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, family as service};

#[get("/families")]
pub async fn list_families(
    params: web::Query<ListRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = service::list_families(repo.as_ref(), &params)?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/families/{family_id}")]
pub async fn get_family(
    family_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let family = service::get_family(repo.as_ref(), family_id.into_inner())?;
    Ok(HttpResponse::Ok().json(family))
}

#[post("/families")]
pub async fn create_family(
    form: web::Json<FamilyForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let family = service::create_family(repo.as_ref(), &(&*form).into())?;
    Ok(HttpResponse::Created().json(family))
}

#[put("/families/{family_id}")]
pub async fn update_family(
    family_id: web::Path<i32>,
    form: web::Json<FamilyForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let family = service::update_family(repo.as_ref(), family_id.into_inner(), &(&*form).into())?;
    Ok(HttpResponse::Ok().json(family))
}

#[delete("/families/{family_id}")]
pub async fn delete_family(
    family_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_family(repo.as_ref(), family_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
