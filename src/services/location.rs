use crate::domain::location::{Location, NewLocation, UpdateLocation};
use crate::listing::{ListRequest, Page};
use crate::repository::location::LOCATION_LIST_CONFIG;
use crate::repository::{LocationReader, LocationWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_locations<R>(
    repo: &R,
    request: &ListRequest,
    is_active: Option<bool>,
) -> ServiceResult<Page<Location>>
where
    R: LocationReader + ?Sized,
{
    let params = request.resolve(&LOCATION_LIST_CONFIG)?;
    let (total, locations) = repo.list_locations(&params, is_active)?;
    Ok(Page::new(locations, total, &params))
}

pub fn get_location<R>(repo: &R, location_id: i32) -> ServiceResult<Location>
where
    R: LocationReader + ?Sized,
{
    repo.get_location_by_id(location_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_location<R>(repo: &R, new_location: &NewLocation) -> ServiceResult<Location>
where
    R: LocationWriter + ?Sized,
{
    Ok(repo.create_location(new_location)?)
}

pub fn update_location<R>(
    repo: &R,
    location_id: i32,
    updates: &UpdateLocation,
) -> ServiceResult<Location>
where
    R: LocationWriter + ?Sized,
{
    Ok(repo.update_location(location_id, updates)?)
}

pub fn delete_location<R>(repo: &R, location_id: i32) -> ServiceResult<()>
where
    R: LocationWriter + ?Sized,
{
    Ok(repo.delete_location(location_id)?)
}
