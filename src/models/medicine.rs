use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::medicine::{
    Medicine as DomainMedicine, NewMedicine as DomainNewMedicine,
    UpdateMedicine as DomainUpdateMedicine,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::medicines)]
/// Diesel model for [`crate::domain::medicine::Medicine`]. The joined family
/// name is not part of the row; listing queries attach it separately.
pub struct Medicine {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub family_id: Option<i32>,
    pub composition: Option<String>,
    pub indications: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::medicines)]
/// Insertable form of [`Medicine`]. The code is generated by the repository
/// right before insertion, so this borrows it separately from the domain
/// payload.
pub struct NewMedicine<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub family_id: Option<i32>,
    pub composition: Option<&'a str>,
    pub indications: Option<&'a str>,
}

impl<'a> NewMedicine<'a> {
    pub fn from_domain(medicine: &'a DomainNewMedicine, code: &'a str) -> Self {
        Self {
            code,
            name: medicine.name.as_str(),
            family_id: medicine.family_id,
            composition: medicine.composition.as_deref(),
            indications: medicine.indications.as_deref(),
        }
    }
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::medicines)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Medicine`] record.
pub struct UpdateMedicine<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub family_id: Option<i32>,
    pub composition: Option<&'a str>,
    pub indications: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl<'a> From<&'a DomainUpdateMedicine> for UpdateMedicine<'a> {
    fn from(medicine: &'a DomainUpdateMedicine) -> Self {
        Self {
            code: medicine.code.as_str(),
            name: medicine.name.as_str(),
            family_id: medicine.family_id,
            composition: medicine.composition.as_deref(),
            indications: medicine.indications.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl Medicine {
    /// Converts the row into a domain medicine carrying the family name
    /// resolved by the caller's join.
    pub fn into_domain(self, family_name: Option<String>) -> DomainMedicine {
        DomainMedicine {
            id: self.id,
            code: self.code,
            name: self.name,
            family_id: self.family_id,
            family_name,
            composition: self.composition,
            indications: self.indications,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_attaches_generated_code() {
        let domain = DomainNewMedicine::new(
            "Paracétamol forte".to_string(),
            Some(3),
            None,
            Some("Douleurs légères".to_string()),
        );
        let new = NewMedicine::from_domain(&domain, "PAR003");
        assert_eq!(new.code, "PAR003");
        assert_eq!(new.name, "Paracétamol forte");
        assert_eq!(new.family_id, Some(3));
        assert_eq!(new.composition, None);
        assert_eq!(new.indications, Some("Douleurs légères"));
    }

    #[test]
    fn into_domain_carries_joined_family_name() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let row = Medicine {
            id: 1,
            code: "PAR001".to_string(),
            name: "Paracétamol".to_string(),
            family_id: Some(3),
            composition: None,
            indications: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let domain = row.into_domain(Some("Antalgiques".to_string()));
        assert_eq!(domain.code, "PAR001");
        assert_eq!(domain.family_name.as_deref(), Some("Antalgiques"));
    }
}
