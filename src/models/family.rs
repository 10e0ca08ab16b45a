use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::family::{
    Family as DomainFamily, NewFamily as DomainNewFamily, UpdateFamily as DomainUpdateFamily,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::families)]
/// Diesel model for [`crate::domain::family::Family`].
pub struct Family {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::families)]
/// Insertable form of [`Family`].
pub struct NewFamily<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::families)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Family`] record.
pub struct UpdateFamily<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Family> for DomainFamily {
    fn from(family: Family) -> Self {
        Self {
            id: family.id,
            name: family.name,
            description: family.description,
            created_at: family.created_at,
            updated_at: family.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewFamily> for NewFamily<'a> {
    fn from(family: &'a DomainNewFamily) -> Self {
        Self {
            name: family.name.as_str(),
            description: family.description.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateFamily> for UpdateFamily<'a> {
    fn from(family: &'a DomainUpdateFamily) -> Self {
        Self {
            name: family.name.as_str(),
            description: family.description.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_creates_newfamily() {
        let domain = DomainNewFamily::new(
            "Antibiotiques".to_string(),
            Some("  Pénicillines et apparentés  ".to_string()),
        );
        let new: NewFamily = (&domain).into();
        assert_eq!(new.name, "Antibiotiques");
        assert_eq!(new.description, Some("Pénicillines et apparentés"));
    }

    #[test]
    fn blank_description_is_dropped() {
        let domain = DomainNewFamily::new("Antalgiques".to_string(), Some("   ".to_string()));
        let new: NewFamily = (&domain).into();
        assert_eq!(new.description, None);
    }

    #[test]
    fn family_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_family = Family {
            id: 7,
            name: "Antalgiques".to_string(),
            description: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let domain: DomainFamily = db_family.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.name, "Antalgiques");
        assert_eq!(domain.description, None);
        assert_eq!(domain.created_at, now);
    }
}
