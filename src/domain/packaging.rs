use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A medicine/dosage-form/unit combination ("conditionnement") with its
/// price. Display names of the joined records are resolved at load time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Packaging {
    pub id: i32,
    pub medicine_id: i32,
    pub medicine_code: String,
    pub medicine_name: String,
    pub form_id: i32,
    pub form_name: String,
    pub packaging_unit_id: i32,
    pub packaging_unit_name: String,
    pub content_unit_id: i32,
    pub content_unit_name: String,
    pub content_quantity: f64,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPackaging {
    pub medicine_id: i32,
    pub form_id: i32,
    pub packaging_unit_id: i32,
    pub content_unit_id: i32,
    pub content_quantity: f64,
    pub price: f64,
}
