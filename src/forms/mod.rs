pub mod dosage_form;
pub mod family;
pub mod location;
pub mod medicine;
pub mod packaging;
pub mod supplier;
pub mod unit;

use serde::Deserialize;
use validator::Validate;

/// Id batch accepted by the mass-destroy endpoints.
#[derive(Deserialize, Validate)]
pub struct IdsForm {
    #[validate(length(min = 1))]
    pub ids: Vec<i32>,
}
