use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::normalize_optional;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tax_number: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tax_number: Option<String>,
}

impl NewSupplier {
    #[must_use]
    pub fn new(
        name: String,
        contact_person: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        tax_number: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            contact_person: normalize_optional(contact_person),
            phone: normalize_optional(phone),
            email: normalize_optional(email).map(|s| s.to_lowercase()),
            address: normalize_optional(address),
            tax_number: normalize_optional(tax_number),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateSupplier {
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tax_number: Option<String>,
}

impl UpdateSupplier {
    #[must_use]
    pub fn new(
        name: String,
        contact_person: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        tax_number: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            contact_person: normalize_optional(contact_person),
            phone: normalize_optional(phone),
            email: normalize_optional(email).map(|s| s.to_lowercase()),
            address: normalize_optional(address),
            tax_number: normalize_optional(tax_number),
        }
    }
}
