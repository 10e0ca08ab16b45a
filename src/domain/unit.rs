use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::normalize_optional;

/// Role a unit plays in a packaging description.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Countable dose units: tablets, capsules, ...
    Primary,
    /// Measured quantities: ml, mg, ...
    Measure,
    /// Outer containers: boxes, cartons, ...
    Container,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Primary => "primary",
            UnitKind::Measure => "measure",
            UnitKind::Container => "container",
        }
    }
}

impl From<&str> for UnitKind {
    fn from(value: &str) -> Self {
        match value {
            "measure" => UnitKind::Measure,
            "container" => UnitKind::Container,
            _ => UnitKind::Primary,
        }
    }
}

/// Measurement or packaging unit referenced by packagings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Unit {
    pub id: i32,
    pub name: String,
    pub abbreviation: Option<String>,
    pub kind: UnitKind,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUnit {
    pub name: String,
    pub abbreviation: Option<String>,
    pub kind: UnitKind,
    pub description: Option<String>,
}

impl NewUnit {
    #[must_use]
    pub fn new(
        name: String,
        abbreviation: Option<String>,
        kind: UnitKind,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            abbreviation: normalize_optional(abbreviation),
            kind,
            description: normalize_optional(description),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateUnit {
    pub name: String,
    pub abbreviation: Option<String>,
    pub kind: UnitKind,
    pub description: Option<String>,
}

impl UpdateUnit {
    #[must_use]
    pub fn new(
        name: String,
        abbreviation: Option<String>,
        kind: UnitKind,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            abbreviation: normalize_optional(abbreviation),
            kind,
            description: normalize_optional(description),
        }
    }
}
