use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::packaging::{NewPackaging as DomainNewPackaging, Packaging as DomainPackaging};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::medicine_packagings)]
/// Diesel model for [`crate::domain::packaging::Packaging`].
pub struct Packaging {
    pub id: i32,
    pub medicine_id: i32,
    pub form_id: i32,
    pub packaging_unit_id: i32,
    pub content_unit_id: i32,
    pub content_quantity: f64,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::medicine_packagings)]
pub struct NewPackaging {
    pub medicine_id: i32,
    pub form_id: i32,
    pub packaging_unit_id: i32,
    pub content_unit_id: i32,
    pub content_quantity: f64,
    pub price: f64,
}

impl From<&DomainNewPackaging> for NewPackaging {
    fn from(packaging: &DomainNewPackaging) -> Self {
        Self {
            medicine_id: packaging.medicine_id,
            form_id: packaging.form_id,
            packaging_unit_id: packaging.packaging_unit_id,
            content_unit_id: packaging.content_unit_id,
            content_quantity: packaging.content_quantity,
            price: packaging.price,
        }
    }
}

/// Display names resolved by the listing joins and unit lookups.
pub struct PackagingLabels {
    pub medicine_code: String,
    pub medicine_name: String,
    pub form_name: String,
    pub packaging_unit_name: String,
    pub content_unit_name: String,
}

impl Packaging {
    pub fn into_domain(self, labels: PackagingLabels) -> DomainPackaging {
        DomainPackaging {
            id: self.id,
            medicine_id: self.medicine_id,
            medicine_code: labels.medicine_code,
            medicine_name: labels.medicine_name,
            form_id: self.form_id,
            form_name: labels.form_name,
            packaging_unit_id: self.packaging_unit_id,
            packaging_unit_name: labels.packaging_unit_name,
            content_unit_id: self.content_unit_id,
            content_unit_name: labels.content_unit_name,
            content_quantity: self.content_quantity,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
