use chrono::Utc;
use diesel::prelude::*;

use crate::codegen;
use crate::domain::medicine::{Medicine, NewMedicine, UpdateMedicine};
use crate::listing::{ListConfig, ListParams, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ListPage, MedicineReader, MedicineWriter};

pub const MEDICINE_LIST_CONFIG: ListConfig = ListConfig {
    default_sort_field: "code",
    default_per_page: 25,
    sortable_fields: &["id", "code", "name", "family.name", "created_at"],
};

/// Bounded retries when the UNIQUE backstop on the code column fires under
/// concurrent creation.
const MAX_CODE_ATTEMPTS: usize = 3;

impl MedicineReader for DieselRepository {
    fn get_medicine_by_id(&self, id: i32) -> RepositoryResult<Option<Medicine>> {
        use crate::models::medicine::Medicine as DbMedicine;
        use crate::schema::{families, medicines};

        let mut conn = self.conn()?;
        let row = medicines::table
            .left_join(families::table)
            .filter(medicines::id.eq(id))
            .filter(medicines::deleted_at.is_null())
            .select((medicines::all_columns, families::name.nullable()))
            .first::<(DbMedicine, Option<String>)>(&mut conn)
            .optional()?;

        Ok(row.map(|(medicine, family_name)| medicine.into_domain(family_name)))
    }

    fn list_medicines(&self, params: &ListParams) -> RepositoryResult<ListPage<Medicine>> {
        use crate::models::medicine::Medicine as DbMedicine;
        use crate::schema::{families, medicines};

        let mut conn = self.conn()?;

        let mut query = medicines::table
            .left_join(families::table)
            .filter(medicines::deleted_at.is_null())
            .select((medicines::all_columns, families::name.nullable()))
            .into_boxed();
        let mut count_query = medicines::table
            .left_join(families::table)
            .filter(medicines::deleted_at.is_null())
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(term) = &params.search {
            let pattern = format!("%{term}%");
            query = query.filter(
                medicines::code
                    .like(pattern.clone())
                    .or(medicines::name.like(pattern.clone()))
                    .or(families::name.like(pattern.clone())),
            );
            count_query = count_query.filter(
                medicines::code
                    .like(pattern.clone())
                    .or(medicines::name.like(pattern.clone()))
                    .or(families::name.like(pattern)),
            );
        }

        // The family name lives on the joined table; every ordering carries
        // the id tie-break for stable page boundaries.
        query = match (params.sort.field.as_str(), params.sort.direction) {
            ("code", SortDirection::Asc) => {
                query.order((medicines::code.asc(), medicines::id.asc()))
            }
            ("code", SortDirection::Desc) => {
                query.order((medicines::code.desc(), medicines::id.asc()))
            }
            ("name", SortDirection::Asc) => {
                query.order((medicines::name.asc(), medicines::id.asc()))
            }
            ("name", SortDirection::Desc) => {
                query.order((medicines::name.desc(), medicines::id.asc()))
            }
            ("family.name", SortDirection::Asc) => {
                query.order((families::name.asc(), medicines::id.asc()))
            }
            ("family.name", SortDirection::Desc) => {
                query.order((families::name.desc(), medicines::id.asc()))
            }
            ("created_at", SortDirection::Asc) => {
                query.order((medicines::created_at.asc(), medicines::id.asc()))
            }
            ("created_at", SortDirection::Desc) => {
                query.order((medicines::created_at.desc(), medicines::id.asc()))
            }
            (_, SortDirection::Desc) => query.order(medicines::id.desc()),
            _ => query.order(medicines::id.asc()),
        };

        let total: i64 = count_query.first(&mut conn)?;

        let items = query
            .limit(params.per_page)
            .offset(params.offset())
            .load::<(DbMedicine, Option<String>)>(&mut conn)?
            .into_iter()
            .map(|(medicine, family_name)| medicine.into_domain(family_name))
            .collect();

        Ok((total, items))
    }
}

impl MedicineWriter for DieselRepository {
    fn create_medicine(&self, new_medicine: &NewMedicine) -> RepositoryResult<Medicine> {
        use crate::models::medicine::{Medicine as DbMedicine, NewMedicine as DbNewMedicine};
        use crate::schema::{families, medicines};

        let mut conn = self.conn()?;
        let prefix = codegen::code_prefix(&new_medicine.name);

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            // The IMMEDIATE transaction takes the write lock before the max
            // suffix is read, so concurrent creations serialize instead of
            // both observing the same sequence number.
            let result = conn.immediate_transaction::<DbMedicine, RepositoryError, _>(|conn| {
                // Soft-deleted rows stay in scope: freed numbers are never
                // reissued.
                let existing: Vec<String> = medicines::table
                    .filter(medicines::code.like(format!("{prefix}%")))
                    .select(medicines::code)
                    .load(conn)?;

                let code = codegen::next_code(&prefix, &existing);
                let insertable = DbNewMedicine::from_domain(new_medicine, &code);

                let created = diesel::insert_into(medicines::table)
                    .values(&insertable)
                    .get_result::<DbMedicine>(conn)?;
                Ok(created)
            });

            match result {
                Ok(row) => {
                    let family_name = match row.family_id {
                        Some(family_id) => families::table
                            .find(family_id)
                            .select(families::name)
                            .first::<String>(&mut conn)
                            .optional()?,
                        None => None,
                    };
                    return Ok(row.into_domain(family_name));
                }
                Err(err)
                    if err.is_unique_violation_on("medicines.code")
                        && attempt < MAX_CODE_ATTEMPTS =>
                {
                    log::warn!("Medicine code collision (attempt {attempt}), regenerating");
                }
                Err(err) => return Err(err),
            }
        }

        Err(RepositoryError::ConstraintViolation(
            "Could not allocate a unique medicine code".to_string(),
        ))
    }

    fn update_medicine(
        &self,
        medicine_id: i32,
        updates: &UpdateMedicine,
    ) -> RepositoryResult<Medicine> {
        use crate::models::medicine::{Medicine as DbMedicine, UpdateMedicine as DbUpdateMedicine};
        use crate::schema::{families, medicines};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateMedicine = updates.into();

        let updated = diesel::update(
            medicines::table
                .filter(medicines::id.eq(medicine_id))
                .filter(medicines::deleted_at.is_null()),
        )
        .set(&db_updates)
        .get_result::<DbMedicine>(&mut conn)?;

        let family_name = match updated.family_id {
            Some(family_id) => families::table
                .find(family_id)
                .select(families::name)
                .first::<String>(&mut conn)
                .optional()?,
            None => None,
        };

        Ok(updated.into_domain(family_name))
    }

    fn delete_medicine(&self, medicine_id: i32) -> RepositoryResult<()> {
        use crate::schema::medicines;

        let mut conn = self.conn()?;
        let affected = diesel::update(
            medicines::table
                .filter(medicines::id.eq(medicine_id))
                .filter(medicines::deleted_at.is_null()),
        )
        .set(medicines::deleted_at.eq(Utc::now().naive_utc()))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn delete_medicines(&self, medicine_ids: &[i32]) -> RepositoryResult<usize> {
        use crate::schema::medicines;

        let mut conn = self.conn()?;
        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let existing: Vec<i32> = medicines::table
                .filter(medicines::id.eq_any(medicine_ids))
                .filter(medicines::deleted_at.is_null())
                .select(medicines::id)
                .load(conn)?;

            let missing: Vec<String> = medicine_ids
                .iter()
                .filter(|id| !existing.contains(id))
                .map(|id| id.to_string())
                .collect();
            if !missing.is_empty() {
                return Err(RepositoryError::ValidationError(format!(
                    "Unknown medicine ids: {}",
                    missing.join(", ")
                )));
            }

            let affected = diesel::update(
                medicines::table
                    .filter(medicines::id.eq_any(medicine_ids))
                    .filter(medicines::deleted_at.is_null()),
            )
            .set(medicines::deleted_at.eq(Utc::now().naive_utc()))
            .execute(conn)?;
            Ok(affected)
        })
    }
}
