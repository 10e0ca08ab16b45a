use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::normalize_optional;

/// Physical storage location (shelf, fridge, stockroom).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl NewLocation {
    #[must_use]
    pub fn new(name: String, code: String, description: Option<String>, is_active: bool) -> Self {
        Self {
            name: name.trim().to_string(),
            code: code.trim().to_string(),
            description: normalize_optional(description),
            is_active,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateLocation {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateLocation {
    #[must_use]
    pub fn new(name: String, code: String, description: Option<String>, is_active: bool) -> Self {
        Self {
            name: name.trim().to_string(),
            code: code.trim().to_string(),
            description: normalize_optional(description),
            is_active,
        }
    }
}
