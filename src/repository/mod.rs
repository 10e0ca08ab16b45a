use crate::db::{DbConnection, DbPool};
use crate::domain::dosage_form::{DosageForm, NewDosageForm, UpdateDosageForm};
use crate::domain::family::{Family, NewFamily, UpdateFamily};
use crate::domain::location::{Location, NewLocation, UpdateLocation};
use crate::domain::medicine::{Medicine, NewMedicine, UpdateMedicine};
use crate::domain::packaging::{NewPackaging, Packaging};
use crate::domain::supplier::{NewSupplier, Supplier, UpdateSupplier};
use crate::domain::unit::{NewUnit, Unit, UnitKind, UpdateUnit};
use crate::listing::ListParams;
use crate::repository::errors::RepositoryResult;

pub mod dosage_form;
pub mod errors;
pub mod family;
pub mod location;
pub mod medicine;
pub mod packaging;
pub mod supplier;
pub mod unit;

#[cfg(test)]
pub mod mock;

/// Diesel-backed repository shared across handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Listings return the full filtered count alongside one page of rows.
pub type ListPage<T> = (i64, Vec<T>);

pub trait FamilyReader {
    fn get_family_by_id(&self, id: i32) -> RepositoryResult<Option<Family>>;
    fn list_families(&self, params: &ListParams) -> RepositoryResult<ListPage<Family>>;
}

pub trait FamilyWriter {
    fn create_family(&self, new_family: &NewFamily) -> RepositoryResult<Family>;
    fn update_family(&self, family_id: i32, updates: &UpdateFamily) -> RepositoryResult<Family>;
    fn delete_family(&self, family_id: i32) -> RepositoryResult<()>;
}

pub trait DosageFormReader {
    fn get_dosage_form_by_id(&self, id: i32) -> RepositoryResult<Option<DosageForm>>;
    fn list_dosage_forms(&self, params: &ListParams) -> RepositoryResult<ListPage<DosageForm>>;
}

pub trait DosageFormWriter {
    fn create_dosage_form(&self, new_form: &NewDosageForm) -> RepositoryResult<DosageForm>;
    fn update_dosage_form(
        &self,
        form_id: i32,
        updates: &UpdateDosageForm,
    ) -> RepositoryResult<DosageForm>;
    fn delete_dosage_form(&self, form_id: i32) -> RepositoryResult<()>;
}

pub trait UnitReader {
    fn get_unit_by_id(&self, id: i32) -> RepositoryResult<Option<Unit>>;
    fn list_units(
        &self,
        params: &ListParams,
        kind: Option<UnitKind>,
    ) -> RepositoryResult<ListPage<Unit>>;
}

pub trait UnitWriter {
    fn create_unit(&self, new_unit: &NewUnit) -> RepositoryResult<Unit>;
    fn update_unit(&self, unit_id: i32, updates: &UpdateUnit) -> RepositoryResult<Unit>;
    fn delete_unit(&self, unit_id: i32) -> RepositoryResult<()>;
    /// All-or-nothing batch delete; fails without deleting anything when any
    /// id is unknown.
    fn delete_units(&self, unit_ids: &[i32]) -> RepositoryResult<usize>;
}

pub trait MedicineReader {
    fn get_medicine_by_id(&self, id: i32) -> RepositoryResult<Option<Medicine>>;
    fn list_medicines(&self, params: &ListParams) -> RepositoryResult<ListPage<Medicine>>;
}

pub trait MedicineWriter {
    /// Generates the product code and inserts the medicine in one
    /// serialized transaction.
    fn create_medicine(&self, new_medicine: &NewMedicine) -> RepositoryResult<Medicine>;
    fn update_medicine(
        &self,
        medicine_id: i32,
        updates: &UpdateMedicine,
    ) -> RepositoryResult<Medicine>;
    fn delete_medicine(&self, medicine_id: i32) -> RepositoryResult<()>;
    /// All-or-nothing batch soft delete; fails without deleting anything
    /// when any id is unknown.
    fn delete_medicines(&self, medicine_ids: &[i32]) -> RepositoryResult<usize>;
}

pub trait PackagingReader {
    fn get_packaging_by_id(&self, id: i32) -> RepositoryResult<Option<Packaging>>;
    fn list_packagings(&self, params: &ListParams) -> RepositoryResult<ListPage<Packaging>>;
    fn list_medicine_packagings(&self, medicine_id: i32) -> RepositoryResult<Vec<Packaging>>;
}

pub trait PackagingWriter {
    fn create_packaging(&self, new_packaging: &NewPackaging) -> RepositoryResult<Packaging>;
    /// Inserts a batch of packagings in one transaction.
    fn create_packagings(&self, new_packagings: &[NewPackaging]) -> RepositoryResult<usize>;
    fn delete_packaging(&self, packaging_id: i32) -> RepositoryResult<()>;
}

pub trait SupplierReader {
    fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
    fn list_suppliers(&self, params: &ListParams) -> RepositoryResult<ListPage<Supplier>>;
}

pub trait SupplierWriter {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
    fn update_supplier(
        &self,
        supplier_id: i32,
        updates: &UpdateSupplier,
    ) -> RepositoryResult<Supplier>;
    fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()>;
}

pub trait LocationReader {
    fn get_location_by_id(&self, id: i32) -> RepositoryResult<Option<Location>>;
    fn list_locations(
        &self,
        params: &ListParams,
        is_active: Option<bool>,
    ) -> RepositoryResult<ListPage<Location>>;
}

pub trait LocationWriter {
    fn create_location(&self, new_location: &NewLocation) -> RepositoryResult<Location>;
    fn update_location(
        &self,
        location_id: i32,
        updates: &UpdateLocation,
    ) -> RepositoryResult<Location>;
    fn delete_location(&self, location_id: i32) -> RepositoryResult<()>;
}
