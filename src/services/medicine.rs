use serde::Serialize;

use crate::domain::medicine::{Medicine, NewMedicine, UpdateMedicine};
use crate::domain::packaging::Packaging;
use crate::listing::{ListRequest, Page};
use crate::repository::medicine::MEDICINE_LIST_CONFIG;
use crate::repository::{MedicineReader, MedicineWriter, PackagingReader};
use crate::services::{ServiceError, ServiceResult};

/// Detail payload: the medicine together with its packagings.
#[derive(Debug, Serialize)]
pub struct MedicineDetails {
    #[serde(flatten)]
    pub medicine: Medicine,
    pub packagings: Vec<Packaging>,
}

pub fn list_medicines<R>(repo: &R, request: &ListRequest) -> ServiceResult<Page<Medicine>>
where
    R: MedicineReader + ?Sized,
{
    let params = request.resolve(&MEDICINE_LIST_CONFIG)?;
    let (total, medicines) = repo.list_medicines(&params)?;
    Ok(Page::new(medicines, total, &params))
}

pub fn get_medicine<R>(repo: &R, medicine_id: i32) -> ServiceResult<MedicineDetails>
where
    R: MedicineReader + PackagingReader + ?Sized,
{
    let medicine = repo
        .get_medicine_by_id(medicine_id)?
        .ok_or(ServiceError::NotFound)?;
    let packagings = repo.list_medicine_packagings(medicine_id)?;

    Ok(MedicineDetails {
        medicine,
        packagings,
    })
}

pub fn create_medicine<R>(repo: &R, new_medicine: &NewMedicine) -> ServiceResult<Medicine>
where
    R: MedicineWriter + ?Sized,
{
    Ok(repo.create_medicine(new_medicine)?)
}

pub fn update_medicine<R>(
    repo: &R,
    medicine_id: i32,
    updates: &UpdateMedicine,
) -> ServiceResult<Medicine>
where
    R: MedicineWriter + ?Sized,
{
    Ok(repo.update_medicine(medicine_id, updates)?)
}

pub fn delete_medicine<R>(repo: &R, medicine_id: i32) -> ServiceResult<()>
where
    R: MedicineWriter + ?Sized,
{
    Ok(repo.delete_medicine(medicine_id)?)
}

/// Deletes the given medicines in one transaction; nothing is removed when
/// any id is unknown.
pub fn delete_medicines<R>(repo: &R, medicine_ids: &[i32]) -> ServiceResult<usize>
where
    R: MedicineWriter + ?Sized,
{
    if medicine_ids.is_empty() {
        return Err(ServiceError::Validation(
            "At least one id is required".to_string(),
        ));
    }
    Ok(repo.delete_medicines(medicine_ids)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn sample_medicine(id: i32, code: &str) -> Medicine {
        Medicine {
            id,
            code: code.to_string(),
            name: "Paracétamol".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn get_medicine_includes_packagings() {
        let mut repo = MockRepository::new();
        repo.expect_get_medicine_by_id()
            .returning(|id| Ok(Some(sample_medicine(id, "PAR001"))));
        repo.expect_list_medicine_packagings()
            .returning(|_| Ok(vec![]));

        let details = get_medicine(&repo, 1).unwrap();
        assert_eq!(details.medicine.code, "PAR001");
        assert!(details.packagings.is_empty());
    }

    #[test]
    fn get_medicine_missing_row_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_medicine_by_id().returning(|_| Ok(None));

        let err = get_medicine(&repo, 99).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn list_medicines_defaults_to_25_per_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_medicines()
            .withf(|params| params.per_page == 25 && params.sort.field == "code")
            .returning(|_| Ok((0, vec![])));

        let page = list_medicines(&repo, &ListRequest::default()).unwrap();
        assert_eq!(page.per_page, 25);
        assert_eq!(page.last_page, 1);
    }
}
