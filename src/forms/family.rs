use serde::Deserialize;
use validator::Validate;

use crate::domain::family::{NewFamily, UpdateFamily};

#[derive(Deserialize, Validate)]
/// Form data for creating or updating a therapeutic family.
pub struct FamilyForm {
    /// Display name, unique among active families.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

impl From<&FamilyForm> for NewFamily {
    fn from(form: &FamilyForm) -> Self {
        NewFamily::new(form.name.clone(), form.description.clone())
    }
}

impl From<&FamilyForm> for UpdateFamily {
    fn from(form: &FamilyForm) -> Self {
        UpdateFamily::new(form.name.clone(), form.description.clone())
    }
}
