use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::packaging::NewPackaging;

// Serialize is required by the nested validation on `BulkPackagingForm`,
// which reports the offending rows as error params.
#[derive(Deserialize, Serialize, Validate)]
/// Form data for one packaging of a medicine.
pub struct PackagingForm {
    pub form_id: i32,
    pub packaging_unit_id: i32,
    pub content_unit_id: i32,
    #[validate(range(min = 0.01))]
    pub content_quantity: f64,
    #[validate(range(min = 0.01))]
    pub price: f64,
}

/// Batch payload for `POST /medicines/{id}/packagings`.
#[derive(Deserialize, Validate)]
pub struct BulkPackagingForm {
    #[validate(nested, length(min = 1))]
    pub items: Vec<PackagingForm>,
}

/// Standalone creation payload carrying its own medicine reference.
#[derive(Deserialize, Validate)]
pub struct CreatePackagingForm {
    pub medicine_id: i32,
    pub form_id: i32,
    pub packaging_unit_id: i32,
    pub content_unit_id: i32,
    #[validate(range(min = 0.01))]
    pub content_quantity: f64,
    #[validate(range(min = 0.01))]
    pub price: f64,
}

impl From<&CreatePackagingForm> for NewPackaging {
    fn from(form: &CreatePackagingForm) -> Self {
        NewPackaging {
            medicine_id: form.medicine_id,
            form_id: form.form_id,
            packaging_unit_id: form.packaging_unit_id,
            content_unit_id: form.content_unit_id,
            content_quantity: form.content_quantity,
            price: form.price,
        }
    }
}

impl PackagingForm {
    pub fn into_new_packaging(&self, medicine_id: i32) -> NewPackaging {
        NewPackaging {
            medicine_id,
            form_id: self.form_id,
            packaging_unit_id: self.packaging_unit_id,
            content_unit_id: self.content_unit_id,
            content_quantity: self.content_quantity,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(price: f64) -> PackagingForm {
        PackagingForm {
            form_id: 1,
            packaging_unit_id: 1,
            content_unit_id: 2,
            content_quantity: 20.0,
            price,
        }
    }

    #[test]
    fn bulk_form_rejects_empty_batch() {
        let form = BulkPackagingForm { items: vec![] };
        assert!(form.validate().is_err());
    }

    #[test]
    fn bulk_form_validates_each_row() {
        let form = BulkPackagingForm {
            items: vec![row(12.5), row(0.0)],
        };
        assert!(form.validate().is_err());

        let form = BulkPackagingForm {
            items: vec![row(12.5), row(8.0)],
        };
        assert!(form.validate().is_ok());
    }
}
