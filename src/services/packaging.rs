use crate::domain::packaging::{NewPackaging, Packaging};
use crate::listing::{ListRequest, Page};
use crate::repository::packaging::PACKAGING_LIST_CONFIG;
use crate::repository::{MedicineReader, PackagingReader, PackagingWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_packagings<R>(repo: &R, request: &ListRequest) -> ServiceResult<Page<Packaging>>
where
    R: PackagingReader + ?Sized,
{
    let params = request.resolve(&PACKAGING_LIST_CONFIG)?;
    let (total, packagings) = repo.list_packagings(&params)?;
    Ok(Page::new(packagings, total, &params))
}

pub fn get_packaging<R>(repo: &R, packaging_id: i32) -> ServiceResult<Packaging>
where
    R: PackagingReader + ?Sized,
{
    repo.get_packaging_by_id(packaging_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_packaging<R>(repo: &R, new_packaging: &NewPackaging) -> ServiceResult<Packaging>
where
    R: MedicineReader + PackagingWriter + ?Sized,
{
    if repo.get_medicine_by_id(new_packaging.medicine_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }
    Ok(repo.create_packaging(new_packaging)?)
}

/// Inserts a batch of packagings for one medicine in a single transaction.
pub fn create_medicine_packagings<R>(
    repo: &R,
    medicine_id: i32,
    new_packagings: &[NewPackaging],
) -> ServiceResult<Vec<Packaging>>
where
    R: MedicineReader + PackagingReader + PackagingWriter + ?Sized,
{
    if new_packagings.is_empty() {
        return Err(ServiceError::Validation(
            "At least one packaging is required".to_string(),
        ));
    }
    if new_packagings
        .iter()
        .any(|packaging| packaging.medicine_id != medicine_id)
    {
        return Err(ServiceError::Validation(
            "All packagings must belong to the medicine".to_string(),
        ));
    }
    if repo.get_medicine_by_id(medicine_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.create_packagings(new_packagings)?;
    Ok(repo.list_medicine_packagings(medicine_id)?)
}

pub fn delete_packaging<R>(repo: &R, packaging_id: i32) -> ServiceResult<()>
where
    R: PackagingWriter + ?Sized,
{
    Ok(repo.delete_packaging(packaging_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn sample_new(medicine_id: i32) -> NewPackaging {
        NewPackaging {
            medicine_id,
            form_id: 1,
            packaging_unit_id: 1,
            content_unit_id: 2,
            content_quantity: 20.0,
            price: 3.5,
        }
    }

    #[test]
    fn batch_create_rejects_foreign_medicine_ids() {
        let repo = MockRepository::new();
        let err = create_medicine_packagings(&repo, 1, &[sample_new(2)]).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn batch_create_requires_an_existing_medicine() {
        let mut repo = MockRepository::new();
        repo.expect_get_medicine_by_id().returning(|_| Ok(None));

        let err = create_medicine_packagings(&repo, 1, &[sample_new(1)]).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }
}
