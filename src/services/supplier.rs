use crate::domain::supplier::{NewSupplier, Supplier, UpdateSupplier};
use crate::listing::{ListRequest, Page};
use crate::repository::supplier::SUPPLIER_LIST_CONFIG;
use crate::repository::{SupplierReader, SupplierWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_suppliers<R>(repo: &R, request: &ListRequest) -> ServiceResult<Page<Supplier>>
where
    R: SupplierReader + ?Sized,
{
    let params = request.resolve(&SUPPLIER_LIST_CONFIG)?;
    let (total, suppliers) = repo.list_suppliers(&params)?;
    Ok(Page::new(suppliers, total, &params))
}

pub fn get_supplier<R>(repo: &R, supplier_id: i32) -> ServiceResult<Supplier>
where
    R: SupplierReader + ?Sized,
{
    repo.get_supplier_by_id(supplier_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_supplier<R>(repo: &R, new_supplier: &NewSupplier) -> ServiceResult<Supplier>
where
    R: SupplierWriter + ?Sized,
{
    Ok(repo.create_supplier(new_supplier)?)
}

pub fn update_supplier<R>(
    repo: &R,
    supplier_id: i32,
    updates: &UpdateSupplier,
) -> ServiceResult<Supplier>
where
    R: SupplierWriter + ?Sized,
{
    Ok(repo.update_supplier(supplier_id, updates)?)
}

pub fn delete_supplier<R>(repo: &R, supplier_id: i32) -> ServiceResult<()>
where
    R: SupplierWriter + ?Sized,
{
    Ok(repo.delete_supplier(supplier_id)?)
}
