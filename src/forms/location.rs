use serde::Deserialize;
use validator::Validate;

use crate::domain::location::{NewLocation, UpdateLocation};

fn default_active() -> bool {
    true
}

#[derive(Deserialize, Validate)]
/// Form data for creating or updating a storage location.
pub struct LocationForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Short label printed on shelf tags, unique across locations.
    #[validate(length(min = 1, max = 50))]
    pub code: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl From<&LocationForm> for NewLocation {
    fn from(form: &LocationForm) -> Self {
        NewLocation::new(
            form.name.clone(),
            form.code.clone(),
            form.description.clone(),
            form.is_active,
        )
    }
}

impl From<&LocationForm> for UpdateLocation {
    fn from(form: &LocationForm) -> Self {
        UpdateLocation::new(
            form.name.clone(),
            form.code.clone(),
            form.description.clone(),
            form.is_active,
        )
    }
}
