use diesel::prelude::*;

use crate::domain::unit::{NewUnit, Unit, UnitKind, UpdateUnit};
use crate::listing::{ListConfig, ListParams, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ListPage, UnitReader, UnitWriter};

pub const UNIT_LIST_CONFIG: ListConfig = ListConfig {
    default_sort_field: "name",
    default_per_page: 25,
    sortable_fields: &["id", "name", "abbreviation", "kind", "created_at"],
};

impl UnitReader for DieselRepository {
    fn get_unit_by_id(&self, id: i32) -> RepositoryResult<Option<Unit>> {
        use crate::models::unit::Unit as DbUnit;
        use crate::schema::units;

        let mut conn = self.conn()?;
        let unit = units::table.find(id).first::<DbUnit>(&mut conn).optional()?;

        Ok(unit.map(Into::into))
    }

    fn list_units(
        &self,
        params: &ListParams,
        kind: Option<UnitKind>,
    ) -> RepositoryResult<ListPage<Unit>> {
        use crate::models::unit::Unit as DbUnit;
        use crate::schema::units;

        let mut conn = self.conn()?;

        let mut query = units::table.into_boxed();
        let mut count_query = units::table.select(diesel::dsl::count_star()).into_boxed();

        if let Some(kind) = kind {
            query = query.filter(units::kind.eq(kind.as_str()));
            count_query = count_query.filter(units::kind.eq(kind.as_str()));
        }

        if let Some(term) = &params.search {
            let pattern = format!("%{term}%");
            query = query.filter(
                units::name
                    .like(pattern.clone())
                    .or(units::abbreviation.like(pattern.clone()))
                    .or(units::description.like(pattern.clone())),
            );
            count_query = count_query.filter(
                units::name
                    .like(pattern.clone())
                    .or(units::abbreviation.like(pattern.clone()))
                    .or(units::description.like(pattern)),
            );
        }

        query = match (params.sort.field.as_str(), params.sort.direction) {
            ("name", SortDirection::Asc) => query.order((units::name.asc(), units::id.asc())),
            ("name", SortDirection::Desc) => query.order((units::name.desc(), units::id.asc())),
            ("abbreviation", SortDirection::Asc) => {
                query.order((units::abbreviation.asc(), units::id.asc()))
            }
            ("abbreviation", SortDirection::Desc) => {
                query.order((units::abbreviation.desc(), units::id.asc()))
            }
            ("kind", SortDirection::Asc) => query.order((units::kind.asc(), units::id.asc())),
            ("kind", SortDirection::Desc) => query.order((units::kind.desc(), units::id.asc())),
            ("created_at", SortDirection::Asc) => {
                query.order((units::created_at.asc(), units::id.asc()))
            }
            ("created_at", SortDirection::Desc) => {
                query.order((units::created_at.desc(), units::id.asc()))
            }
            (_, SortDirection::Desc) => query.order(units::id.desc()),
            _ => query.order(units::id.asc()),
        };

        let total: i64 = count_query.first(&mut conn)?;

        let items = query
            .limit(params.per_page)
            .offset(params.offset())
            .load::<DbUnit>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, items))
    }
}

impl UnitWriter for DieselRepository {
    fn create_unit(&self, new_unit: &NewUnit) -> RepositoryResult<Unit> {
        use crate::models::unit::{NewUnit as DbNewUnit, Unit as DbUnit};
        use crate::schema::units;

        let mut conn = self.conn()?;
        let insertable: DbNewUnit = new_unit.into();
        let created = diesel::insert_into(units::table)
            .values(&insertable)
            .get_result::<DbUnit>(&mut conn)?;

        Ok(created.into())
    }

    fn update_unit(&self, unit_id: i32, updates: &UpdateUnit) -> RepositoryResult<Unit> {
        use crate::models::unit::{Unit as DbUnit, UpdateUnit as DbUpdateUnit};
        use crate::schema::units;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateUnit = updates.into();

        let updated = diesel::update(units::table.find(unit_id))
            .set(&db_updates)
            .get_result::<DbUnit>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_unit(&self, unit_id: i32) -> RepositoryResult<()> {
        use crate::schema::units;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(units::table.filter(units::id.eq(unit_id))).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn delete_units(&self, unit_ids: &[i32]) -> RepositoryResult<usize> {
        use crate::schema::units;

        let mut conn = self.conn()?;
        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let existing: Vec<i32> = units::table
                .filter(units::id.eq_any(unit_ids))
                .select(units::id)
                .load(conn)?;

            let missing: Vec<String> = unit_ids
                .iter()
                .filter(|id| !existing.contains(id))
                .map(|id| id.to_string())
                .collect();
            if !missing.is_empty() {
                return Err(RepositoryError::ValidationError(format!(
                    "Unknown unit ids: {}",
                    missing.join(", ")
                )));
            }

            let affected = diesel::delete(units::table.filter(units::id.eq_any(unit_ids)))
                .execute(conn)?;
            Ok(affected)
        })
    }
}
