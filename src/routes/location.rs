use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::forms::location::LocationForm;
use crate::listing::ListRequest;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, location as service};

#[derive(Deserialize)]
struct LocationFilterQuery {
    is_active: Option<bool>,
}

#[get("/locations")]
pub async fn list_locations(
    params: web::Query<ListRequest>,
    filter: web::Query<LocationFilterQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = service::list_locations(repo.as_ref(), &params, filter.is_active)?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/locations/{location_id}")]
pub async fn get_location(
    location_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let location = service::get_location(repo.as_ref(), location_id.into_inner())?;
    Ok(HttpResponse::Ok().json(location))
}

#[post("/locations")]
pub async fn create_location(
    form: web::Json<LocationForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let location = service::create_location(repo.as_ref(), &(&*form).into())?;
    Ok(HttpResponse::Created().json(location))
}

#[put("/locations/{location_id}")]
pub async fn update_location(
    location_id: web::Path<i32>,
    form: web::Json<LocationForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let location =
        service::update_location(repo.as_ref(), location_id.into_inner(), &(&*form).into())?;
    Ok(HttpResponse::Ok().json(location))
}

#[delete("/locations/{location_id}")]
pub async fn delete_location(
    location_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_location(repo.as_ref(), location_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
