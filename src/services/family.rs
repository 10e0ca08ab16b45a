use crate::domain::family::{Family, NewFamily, UpdateFamily};
use crate::listing::{ListRequest, Page};
use crate::repository::family::FAMILY_LIST_CONFIG;
use crate::repository::{FamilyReader, FamilyWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_families<R>(repo: &R, request: &ListRequest) -> ServiceResult<Page<Family>>
where
    R: FamilyReader + ?Sized,
{
    let params = request.resolve(&FAMILY_LIST_CONFIG)?;
    let (total, families) = repo.list_families(&params)?;
    Ok(Page::new(families, total, &params))
}

pub fn get_family<R>(repo: &R, family_id: i32) -> ServiceResult<Family>
where
    R: FamilyReader + ?Sized,
{
    repo.get_family_by_id(family_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_family<R>(repo: &R, new_family: &NewFamily) -> ServiceResult<Family>
where
    R: FamilyWriter + ?Sized,
{
    Ok(repo.create_family(new_family)?)
}

pub fn update_family<R>(repo: &R, family_id: i32, updates: &UpdateFamily) -> ServiceResult<Family>
where
    R: FamilyWriter + ?Sized,
{
    Ok(repo.update_family(family_id, updates)?)
}

pub fn delete_family<R>(repo: &R, family_id: i32) -> ServiceResult<()>
where
    R: FamilyWriter + ?Sized,
{
    Ok(repo.delete_family(family_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListRequest;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn sample_family(id: i32, name: &str) -> Family {
        Family {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn list_families_wraps_results_in_a_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_families()
            .returning(|_| Ok((12, vec![sample_family(1, "Antibiotiques")])));

        let request = ListRequest {
            per_page: Some(10),
            ..Default::default()
        };
        let page = list_families(&repo, &request).unwrap();

        assert_eq!(page.total, 12);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 2);
        assert_eq!(page.data.len(), 1);
    }

    #[test]
    fn list_families_rejects_zero_page() {
        let repo = MockRepository::new();
        let request = ListRequest {
            page: Some(0),
            ..Default::default()
        };

        let err = list_families(&repo, &request).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[test]
    fn get_family_maps_missing_row_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_family_by_id().returning(|_| Ok(None));

        let err = get_family(&repo, 42).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn create_family_surfaces_duplicate_name_as_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_family().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "UNIQUE constraint failed: families.name".to_string(),
            ))
        });

        let new_family = NewFamily::new("Antibiotiques".to_string(), None);
        let err = create_family(&repo, &new_family).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
