use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::normalize_optional;

/// Catalog medicine. `family_name` carries the joined family display name
/// when the row was loaded through a listing query.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Medicine {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub family_id: Option<i32>,
    pub family_name: Option<String>,
    pub composition: Option<String>,
    pub indications: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Creation payload. The product code is derived from `name` at insert time,
/// never supplied by the caller.
#[derive(Clone, Debug, Deserialize)]
pub struct NewMedicine {
    pub name: String,
    pub family_id: Option<i32>,
    pub composition: Option<String>,
    pub indications: Option<String>,
}

impl NewMedicine {
    #[must_use]
    pub fn new(
        name: String,
        family_id: Option<i32>,
        composition: Option<String>,
        indications: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            family_id,
            composition: normalize_optional(composition),
            indications: normalize_optional(indications),
        }
    }
}

/// Update payload. Unlike creation, the code is editable here, subject to
/// the uniqueness constraint.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateMedicine {
    pub code: String,
    pub name: String,
    pub family_id: Option<i32>,
    pub composition: Option<String>,
    pub indications: Option<String>,
}

impl UpdateMedicine {
    #[must_use]
    pub fn new(
        code: String,
        name: String,
        family_id: Option<i32>,
        composition: Option<String>,
        indications: Option<String>,
    ) -> Self {
        Self {
            code: code.trim().to_string(),
            name: name.trim().to_string(),
            family_id,
            composition: normalize_optional(composition),
            indications: normalize_optional(indications),
        }
    }
}
