use crate::domain::dosage_form::{DosageForm, NewDosageForm, UpdateDosageForm};
use crate::listing::{ListRequest, Page};
use crate::repository::dosage_form::DOSAGE_FORM_LIST_CONFIG;
use crate::repository::{DosageFormReader, DosageFormWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_dosage_forms<R>(repo: &R, request: &ListRequest) -> ServiceResult<Page<DosageForm>>
where
    R: DosageFormReader + ?Sized,
{
    let params = request.resolve(&DOSAGE_FORM_LIST_CONFIG)?;
    let (total, forms) = repo.list_dosage_forms(&params)?;
    Ok(Page::new(forms, total, &params))
}

pub fn get_dosage_form<R>(repo: &R, form_id: i32) -> ServiceResult<DosageForm>
where
    R: DosageFormReader + ?Sized,
{
    repo.get_dosage_form_by_id(form_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_dosage_form<R>(repo: &R, new_form: &NewDosageForm) -> ServiceResult<DosageForm>
where
    R: DosageFormWriter + ?Sized,
{
    Ok(repo.create_dosage_form(new_form)?)
}

pub fn update_dosage_form<R>(
    repo: &R,
    form_id: i32,
    updates: &UpdateDosageForm,
) -> ServiceResult<DosageForm>
where
    R: DosageFormWriter + ?Sized,
{
    Ok(repo.update_dosage_form(form_id, updates)?)
}

pub fn delete_dosage_form<R>(repo: &R, form_id: i32) -> ServiceResult<()>
where
    R: DosageFormWriter + ?Sized,
{
    Ok(repo.delete_dosage_form(form_id)?)
}
