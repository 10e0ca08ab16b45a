use serde::Deserialize;
use validator::Validate;

use crate::domain::dosage_form::{NewDosageForm, UpdateDosageForm};

#[derive(Deserialize, Validate)]
/// Form data for creating or updating a galenic form.
pub struct DosageFormForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl From<&DosageFormForm> for NewDosageForm {
    fn from(form: &DosageFormForm) -> Self {
        NewDosageForm::new(form.name.clone())
    }
}

impl From<&DosageFormForm> for UpdateDosageForm {
    fn from(form: &DosageFormForm) -> Self {
        UpdateDosageForm::new(form.name.clone())
    }
}
