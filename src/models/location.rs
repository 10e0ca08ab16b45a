use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::location::{
    Location as DomainLocation, NewLocation as DomainNewLocation,
    UpdateLocation as DomainUpdateLocation,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::locations)]
/// Diesel model for [`crate::domain::location::Location`].
pub struct Location {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::locations)]
pub struct NewLocation<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub description: Option<&'a str>,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::locations)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateLocation<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub description: Option<&'a str>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Location> for DomainLocation {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            code: location.code,
            description: location.description,
            is_active: location.is_active,
            created_at: location.created_at,
            updated_at: location.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewLocation> for NewLocation<'a> {
    fn from(location: &'a DomainNewLocation) -> Self {
        Self {
            name: location.name.as_str(),
            code: location.code.as_str(),
            description: location.description.as_deref(),
            is_active: location.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateLocation> for UpdateLocation<'a> {
    fn from(location: &'a DomainUpdateLocation) -> Self {
        Self {
            name: location.name.as_str(),
            code: location.code.as_str(),
            description: location.description.as_deref(),
            is_active: location.is_active,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
