use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::unit::{
    NewUnit as DomainNewUnit, Unit as DomainUnit, UnitKind, UpdateUnit as DomainUpdateUnit,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::units)]
/// Diesel model for [`crate::domain::unit::Unit`]. The kind is persisted as
/// plain text (`primary`/`measure`/`container`).
pub struct Unit {
    pub id: i32,
    pub name: String,
    pub abbreviation: Option<String>,
    pub kind: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::units)]
pub struct NewUnit<'a> {
    pub name: &'a str,
    pub abbreviation: Option<&'a str>,
    pub kind: &'a str,
    pub description: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::units)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateUnit<'a> {
    pub name: &'a str,
    pub abbreviation: Option<&'a str>,
    pub kind: &'a str,
    pub description: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Unit> for DomainUnit {
    fn from(unit: Unit) -> Self {
        Self {
            id: unit.id,
            name: unit.name,
            abbreviation: unit.abbreviation,
            kind: UnitKind::from(unit.kind.as_str()),
            description: unit.description,
            created_at: unit.created_at,
            updated_at: unit.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewUnit> for NewUnit<'a> {
    fn from(unit: &'a DomainNewUnit) -> Self {
        Self {
            name: unit.name.as_str(),
            abbreviation: unit.abbreviation.as_deref(),
            kind: unit.kind.as_str(),
            description: unit.description.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateUnit> for UpdateUnit<'a> {
    fn from(unit: &'a DomainUpdateUnit) -> Self {
        Self {
            name: unit.name.as_str(),
            abbreviation: unit.abbreviation.as_deref(),
            kind: unit.kind.as_str(),
            description: unit.description.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn kind_round_trips_through_text() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_unit = Unit {
            id: 1,
            name: "Millilitre".to_string(),
            abbreviation: Some("ml".to_string()),
            kind: "measure".to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainUnit = db_unit.into();
        assert_eq!(domain.kind, UnitKind::Measure);
        assert_eq!(domain.kind.as_str(), "measure");
    }

    #[test]
    fn unknown_kind_defaults_to_primary() {
        assert_eq!(UnitKind::from("bottle"), UnitKind::Primary);
    }
}
