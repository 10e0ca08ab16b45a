use chrono::Utc;
use diesel::prelude::*;

use crate::domain::dosage_form::{DosageForm, NewDosageForm, UpdateDosageForm};
use crate::listing::{ListConfig, ListParams, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, DosageFormReader, DosageFormWriter, ListPage};

pub const DOSAGE_FORM_LIST_CONFIG: ListConfig = ListConfig {
    default_sort_field: "id",
    default_per_page: 10,
    sortable_fields: &["id", "name", "created_at"],
};

impl DosageFormReader for DieselRepository {
    fn get_dosage_form_by_id(&self, id: i32) -> RepositoryResult<Option<DosageForm>> {
        use crate::models::dosage_form::DosageForm as DbDosageForm;
        use crate::schema::dosage_forms;

        let mut conn = self.conn()?;
        let form = dosage_forms::table
            .find(id)
            .filter(dosage_forms::deleted_at.is_null())
            .first::<DbDosageForm>(&mut conn)
            .optional()?;

        Ok(form.map(Into::into))
    }

    fn list_dosage_forms(&self, params: &ListParams) -> RepositoryResult<ListPage<DosageForm>> {
        use crate::models::dosage_form::DosageForm as DbDosageForm;
        use crate::schema::dosage_forms;

        let mut conn = self.conn()?;

        let mut query = dosage_forms::table
            .filter(dosage_forms::deleted_at.is_null())
            .into_boxed();
        let mut count_query = dosage_forms::table
            .filter(dosage_forms::deleted_at.is_null())
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(term) = &params.search {
            let pattern = format!("%{term}%");
            query = query.filter(dosage_forms::name.like(pattern.clone()));
            count_query = count_query.filter(dosage_forms::name.like(pattern));
        }

        query = match (params.sort.field.as_str(), params.sort.direction) {
            ("name", SortDirection::Asc) => {
                query.order((dosage_forms::name.asc(), dosage_forms::id.asc()))
            }
            ("name", SortDirection::Desc) => {
                query.order((dosage_forms::name.desc(), dosage_forms::id.asc()))
            }
            ("created_at", SortDirection::Asc) => {
                query.order((dosage_forms::created_at.asc(), dosage_forms::id.asc()))
            }
            ("created_at", SortDirection::Desc) => {
                query.order((dosage_forms::created_at.desc(), dosage_forms::id.asc()))
            }
            (_, SortDirection::Desc) => query.order(dosage_forms::id.desc()),
            _ => query.order(dosage_forms::id.asc()),
        };

        let total: i64 = count_query.first(&mut conn)?;

        let items = query
            .limit(params.per_page)
            .offset(params.offset())
            .load::<DbDosageForm>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, items))
    }
}

impl DosageFormWriter for DieselRepository {
    fn create_dosage_form(&self, new_form: &NewDosageForm) -> RepositoryResult<DosageForm> {
        use crate::models::dosage_form::{
            DosageForm as DbDosageForm, NewDosageForm as DbNewDosageForm,
        };
        use crate::schema::dosage_forms;

        let mut conn = self.conn()?;
        let insertable: DbNewDosageForm = new_form.into();
        let created = diesel::insert_into(dosage_forms::table)
            .values(&insertable)
            .get_result::<DbDosageForm>(&mut conn)?;

        Ok(created.into())
    }

    fn update_dosage_form(
        &self,
        form_id: i32,
        updates: &UpdateDosageForm,
    ) -> RepositoryResult<DosageForm> {
        use crate::models::dosage_form::{
            DosageForm as DbDosageForm, UpdateDosageForm as DbUpdateDosageForm,
        };
        use crate::schema::dosage_forms;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateDosageForm = updates.into();

        let updated = diesel::update(
            dosage_forms::table
                .filter(dosage_forms::id.eq(form_id))
                .filter(dosage_forms::deleted_at.is_null()),
        )
        .set(&db_updates)
        .get_result::<DbDosageForm>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_dosage_form(&self, form_id: i32) -> RepositoryResult<()> {
        use crate::schema::dosage_forms;

        let mut conn = self.conn()?;
        let affected = diesel::update(
            dosage_forms::table
                .filter(dosage_forms::id.eq(form_id))
                .filter(dosage_forms::deleted_at.is_null()),
        )
        .set(dosage_forms::deleted_at.eq(Utc::now().naive_utc()))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
