use diesel::prelude::*;

use crate::domain::location::{Location, NewLocation, UpdateLocation};
use crate::listing::{ListConfig, ListParams, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ListPage, LocationReader, LocationWriter};

pub const LOCATION_LIST_CONFIG: ListConfig = ListConfig {
    default_sort_field: "id",
    default_per_page: 10,
    sortable_fields: &["id", "name", "code", "is_active", "created_at"],
};

impl LocationReader for DieselRepository {
    fn get_location_by_id(&self, id: i32) -> RepositoryResult<Option<Location>> {
        use crate::models::location::Location as DbLocation;
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let location = locations::table
            .find(id)
            .first::<DbLocation>(&mut conn)
            .optional()?;

        Ok(location.map(Into::into))
    }

    fn list_locations(
        &self,
        params: &ListParams,
        is_active: Option<bool>,
    ) -> RepositoryResult<ListPage<Location>> {
        use crate::models::location::Location as DbLocation;
        use crate::schema::locations;

        let mut conn = self.conn()?;

        let mut query = locations::table.into_boxed();
        let mut count_query = locations::table
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(active) = is_active {
            query = query.filter(locations::is_active.eq(active));
            count_query = count_query.filter(locations::is_active.eq(active));
        }

        if let Some(term) = &params.search {
            let pattern = format!("%{term}%");
            query = query.filter(
                locations::name
                    .like(pattern.clone())
                    .or(locations::code.like(pattern.clone())),
            );
            count_query = count_query.filter(
                locations::name
                    .like(pattern.clone())
                    .or(locations::code.like(pattern)),
            );
        }

        query = match (params.sort.field.as_str(), params.sort.direction) {
            ("name", SortDirection::Asc) => {
                query.order((locations::name.asc(), locations::id.asc()))
            }
            ("name", SortDirection::Desc) => {
                query.order((locations::name.desc(), locations::id.asc()))
            }
            ("code", SortDirection::Asc) => {
                query.order((locations::code.asc(), locations::id.asc()))
            }
            ("code", SortDirection::Desc) => {
                query.order((locations::code.desc(), locations::id.asc()))
            }
            ("is_active", SortDirection::Asc) => {
                query.order((locations::is_active.asc(), locations::id.asc()))
            }
            ("is_active", SortDirection::Desc) => {
                query.order((locations::is_active.desc(), locations::id.asc()))
            }
            ("created_at", SortDirection::Asc) => {
                query.order((locations::created_at.asc(), locations::id.asc()))
            }
            ("created_at", SortDirection::Desc) => {
                query.order((locations::created_at.desc(), locations::id.asc()))
            }
            (_, SortDirection::Desc) => query.order(locations::id.desc()),
            _ => query.order(locations::id.asc()),
        };

        let total: i64 = count_query.first(&mut conn)?;

        let items = query
            .limit(params.per_page)
            .offset(params.offset())
            .load::<DbLocation>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, items))
    }
}

impl LocationWriter for DieselRepository {
    fn create_location(&self, new_location: &NewLocation) -> RepositoryResult<Location> {
        use crate::models::location::{Location as DbLocation, NewLocation as DbNewLocation};
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let insertable: DbNewLocation = new_location.into();
        let created = diesel::insert_into(locations::table)
            .values(&insertable)
            .get_result::<DbLocation>(&mut conn)?;

        Ok(created.into())
    }

    fn update_location(
        &self,
        location_id: i32,
        updates: &UpdateLocation,
    ) -> RepositoryResult<Location> {
        use crate::models::location::{Location as DbLocation, UpdateLocation as DbUpdateLocation};
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateLocation = updates.into();

        let updated = diesel::update(locations::table.find(location_id))
            .set(&db_updates)
            .get_result::<DbLocation>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_location(&self, location_id: i32) -> RepositoryResult<()> {
        use crate::schema::locations;

        let mut conn = self.conn()?;
        let affected = diesel::delete(locations::table.filter(locations::id.eq(location_id)))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
