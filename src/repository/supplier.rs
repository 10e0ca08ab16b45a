use diesel::prelude::*;

use crate::domain::supplier::{NewSupplier, Supplier, UpdateSupplier};
use crate::listing::{ListConfig, ListParams, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ListPage, SupplierReader, SupplierWriter};

pub const SUPPLIER_LIST_CONFIG: ListConfig = ListConfig {
    default_sort_field: "id",
    default_per_page: 10,
    sortable_fields: &["id", "name", "contact_person", "email", "created_at"],
};

impl SupplierReader for DieselRepository {
    fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>> {
        use crate::models::supplier::Supplier as DbSupplier;
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let supplier = suppliers::table
            .find(id)
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        Ok(supplier.map(Into::into))
    }

    fn list_suppliers(&self, params: &ListParams) -> RepositoryResult<ListPage<Supplier>> {
        use crate::models::supplier::Supplier as DbSupplier;
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let mut query = suppliers::table.into_boxed();
        let mut count_query = suppliers::table
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(term) = &params.search {
            let pattern = format!("%{term}%");
            query = query.filter(
                suppliers::name
                    .like(pattern.clone())
                    .or(suppliers::contact_person.like(pattern.clone()))
                    .or(suppliers::phone.like(pattern.clone()))
                    .or(suppliers::email.like(pattern.clone())),
            );
            count_query = count_query.filter(
                suppliers::name
                    .like(pattern.clone())
                    .or(suppliers::contact_person.like(pattern.clone()))
                    .or(suppliers::phone.like(pattern.clone()))
                    .or(suppliers::email.like(pattern)),
            );
        }

        query = match (params.sort.field.as_str(), params.sort.direction) {
            ("name", SortDirection::Asc) => {
                query.order((suppliers::name.asc(), suppliers::id.asc()))
            }
            ("name", SortDirection::Desc) => {
                query.order((suppliers::name.desc(), suppliers::id.asc()))
            }
            ("contact_person", SortDirection::Asc) => {
                query.order((suppliers::contact_person.asc(), suppliers::id.asc()))
            }
            ("contact_person", SortDirection::Desc) => {
                query.order((suppliers::contact_person.desc(), suppliers::id.asc()))
            }
            ("email", SortDirection::Asc) => {
                query.order((suppliers::email.asc(), suppliers::id.asc()))
            }
            ("email", SortDirection::Desc) => {
                query.order((suppliers::email.desc(), suppliers::id.asc()))
            }
            ("created_at", SortDirection::Asc) => {
                query.order((suppliers::created_at.asc(), suppliers::id.asc()))
            }
            ("created_at", SortDirection::Desc) => {
                query.order((suppliers::created_at.desc(), suppliers::id.asc()))
            }
            (_, SortDirection::Desc) => query.order(suppliers::id.desc()),
            _ => query.order(suppliers::id.asc()),
        };

        let total: i64 = count_query.first(&mut conn)?;

        let items = query
            .limit(params.per_page)
            .offset(params.offset())
            .load::<DbSupplier>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total, items))
    }
}

impl SupplierWriter for DieselRepository {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier> {
        use crate::models::supplier::{NewSupplier as DbNewSupplier, Supplier as DbSupplier};
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let insertable: DbNewSupplier = new_supplier.into();
        let created = diesel::insert_into(suppliers::table)
            .values(&insertable)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(created.into())
    }

    fn update_supplier(
        &self,
        supplier_id: i32,
        updates: &UpdateSupplier,
    ) -> RepositoryResult<Supplier> {
        use crate::models::supplier::{Supplier as DbSupplier, UpdateSupplier as DbUpdateSupplier};
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateSupplier = updates.into();

        let updated = diesel::update(suppliers::table.find(supplier_id))
            .set(&db_updates)
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let affected = diesel::delete(suppliers::table.filter(suppliers::id.eq(supplier_id)))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
