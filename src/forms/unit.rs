use serde::Deserialize;
use validator::Validate;

use crate::domain::unit::{NewUnit, UnitKind, UpdateUnit};

#[derive(Deserialize, Validate)]
/// Form data for creating or updating a unit.
pub struct UnitForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 10))]
    pub abbreviation: Option<String>,
    pub kind: UnitKind,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

impl From<&UnitForm> for NewUnit {
    fn from(form: &UnitForm) -> Self {
        NewUnit::new(
            form.name.clone(),
            form.abbreviation.clone(),
            form.kind,
            form.description.clone(),
        )
    }
}

impl From<&UnitForm> for UpdateUnit {
    fn from(form: &UnitForm) -> Self {
        UpdateUnit::new(
            form.name.clone(),
            form.abbreviation.clone(),
            form.kind,
            form.description.clone(),
        )
    }
}
