use serde::Deserialize;
use validator::Validate;

use crate::domain::supplier::{NewSupplier, UpdateSupplier};

#[derive(Deserialize, Validate)]
/// Form data for creating or updating a supplier.
pub struct SupplierForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 255))]
    pub contact_person: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 50))]
    pub tax_number: Option<String>,
}

impl From<&SupplierForm> for NewSupplier {
    fn from(form: &SupplierForm) -> Self {
        NewSupplier::new(
            form.name.clone(),
            form.contact_person.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.address.clone(),
            form.tax_number.clone(),
        )
    }
}

impl From<&SupplierForm> for UpdateSupplier {
    fn from(form: &SupplierForm) -> Self {
        UpdateSupplier::new(
            form.name.clone(),
            form.contact_person.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.address.clone(),
            form.tax_number.clone(),
        )
    }
}
