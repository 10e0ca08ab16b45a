use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::domain::unit::UnitKind;
use crate::forms::IdsForm;
use crate::forms::unit::UnitForm;
use crate::listing::ListRequest;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, unit as service};

#[derive(Deserialize)]
struct UnitFilterQuery {
    kind: Option<UnitKind>,
}

#[get("/units")]
pub async fn list_units(
    params: web::Query<ListRequest>,
    filter: web::Query<UnitFilterQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = service::list_units(repo.as_ref(), &params, filter.kind)?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/units/{unit_id}")]
pub async fn get_unit(
    unit_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let unit = service::get_unit(repo.as_ref(), unit_id.into_inner())?;
    Ok(HttpResponse::Ok().json(unit))
}

#[post("/units")]
pub async fn create_unit(
    form: web::Json<UnitForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let unit = service::create_unit(repo.as_ref(), &(&*form).into())?;
    Ok(HttpResponse::Created().json(unit))
}

#[put("/units/{unit_id}")]
pub async fn update_unit(
    unit_id: web::Path<i32>,
    form: web::Json<UnitForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let unit = service::update_unit(repo.as_ref(), unit_id.into_inner(), &(&*form).into())?;
    Ok(HttpResponse::Ok().json(unit))
}

#[delete("/units/{unit_id}")]
pub async fn delete_unit(
    unit_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    service::delete_unit(repo.as_ref(), unit_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/units/mass-destroy")]
pub async fn delete_units(
    form: web::Json<IdsForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    form.validate()?;
    let deleted = service::delete_units(repo.as_ref(), &form.ids)?;
    Ok(HttpResponse::Ok().json(json!({ "deleted": deleted })))
}
