use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::normalize_optional;

/// Therapeutic family grouping related medicines.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Family {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewFamily {
    pub name: String,
    pub description: Option<String>,
}

impl NewFamily {
    #[must_use]
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            description: normalize_optional(description),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateFamily {
    pub name: String,
    pub description: Option<String>,
}

impl UpdateFamily {
    #[must_use]
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            description: normalize_optional(description),
        }
    }
}
