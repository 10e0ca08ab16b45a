use chrono::Utc;
use diesel::prelude::*;

use crate::domain::family::{Family, NewFamily, UpdateFamily};
use crate::listing::{ListConfig, ListParams, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, FamilyReader, FamilyWriter, ListPage};

pub const FAMILY_LIST_CONFIG: ListConfig = ListConfig {
    default_sort_field: "id",
    default_per_page: 10,
    sortable_fields: &["id", "name", "created_at"],
};

impl FamilyReader for DieselRepository {
    fn get_family_by_id(&self, id: i32) -> RepositoryResult<Option<Family>> {
        use crate::models::family::Family as DbFamily;
        use crate::schema::families;

        let mut conn = self.conn()?;
        let family = families::table
            .find(id)
            .filter(families::deleted_at.is_null())
            .first::<DbFamily>(&mut conn)
            .optional()?;

        Ok(family.map(Into::into))
    }

    fn list_families(&self, params: &ListParams) -> RepositoryResult<ListPage<Family>> {
        use crate::models::family::Family as DbFamily;
        use crate::schema::families;

        let mut conn = self.conn()?;

        let mut query = families::table
            .filter(families::deleted_at.is_null())
            .into_boxed();
        let mut count_query = families::table
            .filter(families::deleted_at.is_null())
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(term) = &params.search {
            let pattern = format!("%{term}%");
            query = query.filter(families::name.like(pattern.clone()));
            count_query = count_query.filter(families::name.like(pattern));
        }

        // Secondary order on id keeps page boundaries stable between calls.
        query = match (params.sort.field.as_str(), params.sort.direction) {
            ("name", SortDirection::Asc) => query.order((families::name.asc(), families::id.asc())),
            ("name", SortDirection::Desc) => {
                query.order((families::name.desc(), families::id.asc()))
            }
            ("created_at", SortDirection::Asc) => {
                query.order((families::created_at.asc(), families::id.asc()))
            }
            ("created_at", SortDirection::Desc) => {
                query.order((families::created_at.desc(), families::id.asc()))
            }
            (_, SortDirection::Desc) => query.order(families::id.desc()),
            _ => query.order(families::id.asc()),
        };

        let total: i64 = count_query.first(&mut conn)?;

        let items = query
            .limit(params.per_page)
            .offset(params.offset())
            .load::<DbFamily>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, items))
    }
}

impl FamilyWriter for DieselRepository {
    fn create_family(&self, new_family: &NewFamily) -> RepositoryResult<Family> {
        use crate::models::family::{Family as DbFamily, NewFamily as DbNewFamily};
        use crate::schema::families;

        let mut conn = self.conn()?;
        let insertable: DbNewFamily = new_family.into();
        let created = diesel::insert_into(families::table)
            .values(&insertable)
            .get_result::<DbFamily>(&mut conn)?;

        Ok(created.into())
    }

    fn update_family(&self, family_id: i32, updates: &UpdateFamily) -> RepositoryResult<Family> {
        use crate::models::family::{Family as DbFamily, UpdateFamily as DbUpdateFamily};
        use crate::schema::families;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateFamily = updates.into();

        let updated = diesel::update(
            families::table
                .filter(families::id.eq(family_id))
                .filter(families::deleted_at.is_null()),
        )
        .set(&db_updates)
        .get_result::<DbFamily>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_family(&self, family_id: i32) -> RepositoryResult<()> {
        use crate::schema::families;

        let mut conn = self.conn()?;
        let affected = diesel::update(
            families::table
                .filter(families::id.eq(family_id))
                .filter(families::deleted_at.is_null()),
        )
        .set(families::deleted_at.eq(Utc::now().naive_utc()))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
