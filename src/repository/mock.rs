//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::dosage_form::{DosageForm, NewDosageForm, UpdateDosageForm};
use crate::domain::family::{Family, NewFamily, UpdateFamily};
use crate::domain::location::{Location, NewLocation, UpdateLocation};
use crate::domain::medicine::{Medicine, NewMedicine, UpdateMedicine};
use crate::domain::packaging::{NewPackaging, Packaging};
use crate::domain::supplier::{NewSupplier, Supplier, UpdateSupplier};
use crate::domain::unit::{NewUnit, Unit, UnitKind, UpdateUnit};
use crate::listing::ListParams;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DosageFormReader, DosageFormWriter, FamilyReader, FamilyWriter, ListPage, LocationReader,
    LocationWriter, MedicineReader, MedicineWriter, PackagingReader, PackagingWriter,
    SupplierReader, SupplierWriter, UnitReader, UnitWriter,
};

mock! {
    pub Repository {}

    impl FamilyReader for Repository {
        fn get_family_by_id(&self, id: i32) -> RepositoryResult<Option<Family>>;
        fn list_families(&self, params: &ListParams) -> RepositoryResult<ListPage<Family>>;
    }

    impl FamilyWriter for Repository {
        fn create_family(&self, new_family: &NewFamily) -> RepositoryResult<Family>;
        fn update_family(&self, family_id: i32, updates: &UpdateFamily) -> RepositoryResult<Family>;
        fn delete_family(&self, family_id: i32) -> RepositoryResult<()>;
    }

    impl DosageFormReader for Repository {
        fn get_dosage_form_by_id(&self, id: i32) -> RepositoryResult<Option<DosageForm>>;
        fn list_dosage_forms(&self, params: &ListParams) -> RepositoryResult<ListPage<DosageForm>>;
    }

    impl DosageFormWriter for Repository {
        fn create_dosage_form(&self, new_form: &NewDosageForm) -> RepositoryResult<DosageForm>;
        fn update_dosage_form(
            &self,
            form_id: i32,
            updates: &UpdateDosageForm,
        ) -> RepositoryResult<DosageForm>;
        fn delete_dosage_form(&self, form_id: i32) -> RepositoryResult<()>;
    }

    impl UnitReader for Repository {
        fn get_unit_by_id(&self, id: i32) -> RepositoryResult<Option<Unit>>;
        fn list_units(
            &self,
            params: &ListParams,
            kind: Option<UnitKind>,
        ) -> RepositoryResult<ListPage<Unit>>;
    }

    impl UnitWriter for Repository {
        fn create_unit(&self, new_unit: &NewUnit) -> RepositoryResult<Unit>;
        fn update_unit(&self, unit_id: i32, updates: &UpdateUnit) -> RepositoryResult<Unit>;
        fn delete_unit(&self, unit_id: i32) -> RepositoryResult<()>;
        fn delete_units(&self, unit_ids: &[i32]) -> RepositoryResult<usize>;
    }

    impl MedicineReader for Repository {
        fn get_medicine_by_id(&self, id: i32) -> RepositoryResult<Option<Medicine>>;
        fn list_medicines(&self, params: &ListParams) -> RepositoryResult<ListPage<Medicine>>;
    }

    impl MedicineWriter for Repository {
        fn create_medicine(&self, new_medicine: &NewMedicine) -> RepositoryResult<Medicine>;
        fn update_medicine(
            &self,
            medicine_id: i32,
            updates: &UpdateMedicine,
        ) -> RepositoryResult<Medicine>;
        fn delete_medicine(&self, medicine_id: i32) -> RepositoryResult<()>;
        fn delete_medicines(&self, medicine_ids: &[i32]) -> RepositoryResult<usize>;
    }

    impl PackagingReader for Repository {
        fn get_packaging_by_id(&self, id: i32) -> RepositoryResult<Option<Packaging>>;
        fn list_packagings(&self, params: &ListParams) -> RepositoryResult<ListPage<Packaging>>;
        fn list_medicine_packagings(&self, medicine_id: i32) -> RepositoryResult<Vec<Packaging>>;
    }

    impl PackagingWriter for Repository {
        fn create_packaging(&self, new_packaging: &NewPackaging) -> RepositoryResult<Packaging>;
        fn create_packagings(&self, new_packagings: &[NewPackaging]) -> RepositoryResult<usize>;
        fn delete_packaging(&self, packaging_id: i32) -> RepositoryResult<()>;
    }

    impl SupplierReader for Repository {
        fn get_supplier_by_id(&self, id: i32) -> RepositoryResult<Option<Supplier>>;
        fn list_suppliers(&self, params: &ListParams) -> RepositoryResult<ListPage<Supplier>>;
    }

    impl SupplierWriter for Repository {
        fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
        fn update_supplier(
            &self,
            supplier_id: i32,
            updates: &UpdateSupplier,
        ) -> RepositoryResult<Supplier>;
        fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()>;
    }

    impl LocationReader for Repository {
        fn get_location_by_id(&self, id: i32) -> RepositoryResult<Option<Location>>;
        fn list_locations(
            &self,
            params: &ListParams,
            is_active: Option<bool>,
        ) -> RepositoryResult<ListPage<Location>>;
    }

    impl LocationWriter for Repository {
        fn create_location(&self, new_location: &NewLocation) -> RepositoryResult<Location>;
        fn update_location(
            &self,
            location_id: i32,
            updates: &UpdateLocation,
        ) -> RepositoryResult<Location>;
        fn delete_location(&self, location_id: i32) -> RepositoryResult<()>;
    }
}
