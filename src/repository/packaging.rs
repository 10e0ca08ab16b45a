use std::collections::HashMap;

use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::packaging::{NewPackaging, Packaging};
use crate::listing::{ListConfig, ListParams, SortDirection};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ListPage, PackagingReader, PackagingWriter};

pub const PACKAGING_LIST_CONFIG: ListConfig = ListConfig {
    default_sort_field: "medicine.code",
    default_per_page: 25,
    sortable_fields: &[
        "id",
        "medicine.code",
        "medicine.name",
        "form.name",
        "price",
        "content_quantity",
    ],
};

type PackagingRow = (crate::models::packaging::Packaging, String, String, String);

/// Both unit columns point at the units table, so their names cannot come
/// from the main join and are resolved with one batched lookup instead.
fn unit_names(conn: &mut DbConnection, rows: &[PackagingRow]) -> RepositoryResult<HashMap<i32, String>> {
    use crate::schema::units;

    let mut unit_ids: Vec<i32> = rows
        .iter()
        .flat_map(|(packaging, ..)| [packaging.packaging_unit_id, packaging.content_unit_id])
        .collect();
    unit_ids.sort_unstable();
    unit_ids.dedup();

    let names = units::table
        .filter(units::id.eq_any(&unit_ids))
        .select((units::id, units::name))
        .load::<(i32, String)>(conn)?;

    Ok(names.into_iter().collect())
}

fn into_domain_rows(
    conn: &mut DbConnection,
    rows: Vec<PackagingRow>,
) -> RepositoryResult<Vec<Packaging>> {
    use crate::models::packaging::PackagingLabels;

    let names = unit_names(conn, &rows)?;
    let lookup = |id: i32| names.get(&id).cloned().unwrap_or_default();

    Ok(rows
        .into_iter()
        .map(|(packaging, medicine_code, medicine_name, form_name)| {
            let labels = PackagingLabels {
                medicine_code,
                medicine_name,
                form_name,
                packaging_unit_name: lookup(packaging.packaging_unit_id),
                content_unit_name: lookup(packaging.content_unit_id),
            };
            packaging.into_domain(labels)
        })
        .collect())
}

impl PackagingReader for DieselRepository {
    fn get_packaging_by_id(&self, id: i32) -> RepositoryResult<Option<Packaging>> {
        use crate::schema::{dosage_forms, medicine_packagings, medicines};

        let mut conn = self.conn()?;
        let row = medicine_packagings::table
            .inner_join(medicines::table)
            .inner_join(dosage_forms::table)
            .filter(medicine_packagings::id.eq(id))
            .filter(medicines::deleted_at.is_null())
            .select((
                medicine_packagings::all_columns,
                medicines::code,
                medicines::name,
                dosage_forms::name,
            ))
            .first::<PackagingRow>(&mut conn)
            .optional()?;

        match row {
            Some(row) => {
                let mut items = into_domain_rows(&mut conn, vec![row])?;
                Ok(items.pop())
            }
            None => Ok(None),
        }
    }

    fn list_packagings(&self, params: &ListParams) -> RepositoryResult<ListPage<Packaging>> {
        use crate::schema::{dosage_forms, medicine_packagings, medicines};

        let mut conn = self.conn()?;

        let mut query = medicine_packagings::table
            .inner_join(medicines::table)
            .inner_join(dosage_forms::table)
            .filter(medicines::deleted_at.is_null())
            .select((
                medicine_packagings::all_columns,
                medicines::code,
                medicines::name,
                dosage_forms::name,
            ))
            .into_boxed();
        let mut count_query = medicine_packagings::table
            .inner_join(medicines::table)
            .inner_join(dosage_forms::table)
            .filter(medicines::deleted_at.is_null())
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(term) = &params.search {
            let pattern = format!("%{term}%");
            query = query.filter(
                medicines::code
                    .like(pattern.clone())
                    .or(medicines::name.like(pattern.clone()))
                    .or(dosage_forms::name.like(pattern.clone())),
            );
            count_query = count_query.filter(
                medicines::code
                    .like(pattern.clone())
                    .or(medicines::name.like(pattern.clone()))
                    .or(dosage_forms::name.like(pattern)),
            );
        }

        query = match (params.sort.field.as_str(), params.sort.direction) {
            ("medicine.code", SortDirection::Asc) => {
                query.order((medicines::code.asc(), medicine_packagings::id.asc()))
            }
            ("medicine.code", SortDirection::Desc) => {
                query.order((medicines::code.desc(), medicine_packagings::id.asc()))
            }
            ("medicine.name", SortDirection::Asc) => {
                query.order((medicines::name.asc(), medicine_packagings::id.asc()))
            }
            ("medicine.name", SortDirection::Desc) => {
                query.order((medicines::name.desc(), medicine_packagings::id.asc()))
            }
            ("form.name", SortDirection::Asc) => {
                query.order((dosage_forms::name.asc(), medicine_packagings::id.asc()))
            }
            ("form.name", SortDirection::Desc) => {
                query.order((dosage_forms::name.desc(), medicine_packagings::id.asc()))
            }
            ("price", SortDirection::Asc) => query.order((
                medicine_packagings::price.asc(),
                medicine_packagings::id.asc(),
            )),
            ("price", SortDirection::Desc) => query.order((
                medicine_packagings::price.desc(),
                medicine_packagings::id.asc(),
            )),
            ("content_quantity", SortDirection::Asc) => query.order((
                medicine_packagings::content_quantity.asc(),
                medicine_packagings::id.asc(),
            )),
            ("content_quantity", SortDirection::Desc) => query.order((
                medicine_packagings::content_quantity.desc(),
                medicine_packagings::id.asc(),
            )),
            (_, SortDirection::Desc) => query.order(medicine_packagings::id.desc()),
            _ => query.order(medicine_packagings::id.asc()),
        };

        let total: i64 = count_query.first(&mut conn)?;

        let rows = query
            .limit(params.per_page)
            .offset(params.offset())
            .load::<PackagingRow>(&mut conn)?;

        let items = into_domain_rows(&mut conn, rows)?;
        Ok((total, items))
    }

    fn list_medicine_packagings(&self, medicine_id: i32) -> RepositoryResult<Vec<Packaging>> {
        use crate::schema::{dosage_forms, medicine_packagings, medicines};

        let mut conn = self.conn()?;
        let rows = medicine_packagings::table
            .inner_join(medicines::table)
            .inner_join(dosage_forms::table)
            .filter(medicine_packagings::medicine_id.eq(medicine_id))
            .select((
                medicine_packagings::all_columns,
                medicines::code,
                medicines::name,
                dosage_forms::name,
            ))
            .order(medicine_packagings::id.asc())
            .load::<PackagingRow>(&mut conn)?;

        into_domain_rows(&mut conn, rows)
    }
}

impl PackagingWriter for DieselRepository {
    fn create_packaging(&self, new_packaging: &NewPackaging) -> RepositoryResult<Packaging> {
        use crate::models::packaging::{
            NewPackaging as DbNewPackaging, Packaging as DbPackaging,
        };
        use crate::schema::medicine_packagings;

        let mut conn = self.conn()?;
        let insertable: DbNewPackaging = new_packaging.into();
        let created = diesel::insert_into(medicine_packagings::table)
            .values(&insertable)
            .get_result::<DbPackaging>(&mut conn)?;

        self.get_packaging_by_id(created.id)?
            .ok_or(RepositoryError::NotFound)
    }

    fn create_packagings(&self, new_packagings: &[NewPackaging]) -> RepositoryResult<usize> {
        use crate::models::packaging::NewPackaging as DbNewPackaging;
        use crate::schema::medicine_packagings;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewPackaging> = new_packagings.iter().map(Into::into).collect();

        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let inserted = diesel::insert_into(medicine_packagings::table)
                .values(&insertables)
                .execute(conn)?;
            Ok(inserted)
        })
    }

    fn delete_packaging(&self, packaging_id: i32) -> RepositoryResult<()> {
        use crate::schema::medicine_packagings;

        let mut conn = self.conn()?;
        let affected = diesel::delete(
            medicine_packagings::table.filter(medicine_packagings::id.eq(packaging_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
