use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::dosage_form::{
    DosageForm as DomainDosageForm, NewDosageForm as DomainNewDosageForm,
    UpdateDosageForm as DomainUpdateDosageForm,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::dosage_forms)]
/// Diesel model for [`crate::domain::dosage_form::DosageForm`].
pub struct DosageForm {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dosage_forms)]
pub struct NewDosageForm<'a> {
    pub name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::dosage_forms)]
pub struct UpdateDosageForm<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<DosageForm> for DomainDosageForm {
    fn from(form: DosageForm) -> Self {
        Self {
            id: form.id,
            name: form.name,
            created_at: form.created_at,
            updated_at: form.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewDosageForm> for NewDosageForm<'a> {
    fn from(form: &'a DomainNewDosageForm) -> Self {
        Self {
            name: form.name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateDosageForm> for UpdateDosageForm<'a> {
    fn from(form: &'a DomainUpdateDosageForm) -> Self {
        Self {
            name: form.name.as_str(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
