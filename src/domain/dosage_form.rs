use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Galenic form a medicine is packaged in (tablet, syrup, ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DosageForm {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDosageForm {
    pub name: String,
}

impl NewDosageForm {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateDosageForm {
    pub name: String,
}

impl UpdateDosageForm {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}
