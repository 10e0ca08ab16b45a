use crate::domain::unit::{NewUnit, Unit, UnitKind, UpdateUnit};
use crate::listing::{ListRequest, Page};
use crate::repository::unit::UNIT_LIST_CONFIG;
use crate::repository::{UnitReader, UnitWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_units<R>(
    repo: &R,
    request: &ListRequest,
    kind: Option<UnitKind>,
) -> ServiceResult<Page<Unit>>
where
    R: UnitReader + ?Sized,
{
    let params = request.resolve(&UNIT_LIST_CONFIG)?;
    let (total, units) = repo.list_units(&params, kind)?;
    Ok(Page::new(units, total, &params))
}

pub fn get_unit<R>(repo: &R, unit_id: i32) -> ServiceResult<Unit>
where
    R: UnitReader + ?Sized,
{
    repo.get_unit_by_id(unit_id)?.ok_or(ServiceError::NotFound)
}

pub fn create_unit<R>(repo: &R, new_unit: &NewUnit) -> ServiceResult<Unit>
where
    R: UnitWriter + ?Sized,
{
    Ok(repo.create_unit(new_unit)?)
}

pub fn update_unit<R>(repo: &R, unit_id: i32, updates: &UpdateUnit) -> ServiceResult<Unit>
where
    R: UnitWriter + ?Sized,
{
    Ok(repo.update_unit(unit_id, updates)?)
}

pub fn delete_unit<R>(repo: &R, unit_id: i32) -> ServiceResult<()>
where
    R: UnitWriter + ?Sized,
{
    Ok(repo.delete_unit(unit_id)?)
}

/// Deletes the given units in one transaction; no unit is removed when any
/// id is unknown.
pub fn delete_units<R>(repo: &R, unit_ids: &[i32]) -> ServiceResult<usize>
where
    R: UnitWriter + ?Sized,
{
    if unit_ids.is_empty() {
        return Err(ServiceError::Validation(
            "At least one id is required".to_string(),
        ));
    }
    Ok(repo.delete_units(unit_ids)?)
}
