use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::supplier::{
    NewSupplier as DomainNewSupplier, Supplier as DomainSupplier,
    UpdateSupplier as DomainUpdateSupplier,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::suppliers)]
/// Diesel model for [`crate::domain::supplier::Supplier`].
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tax_number: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct NewSupplier<'a> {
    pub name: &'a str,
    pub contact_person: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub tax_number: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::suppliers)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateSupplier<'a> {
    pub name: &'a str,
    pub contact_person: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub tax_number: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Supplier> for DomainSupplier {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            contact_person: supplier.contact_person,
            phone: supplier.phone,
            email: supplier.email,
            address: supplier.address,
            tax_number: supplier.tax_number,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewSupplier> for NewSupplier<'a> {
    fn from(supplier: &'a DomainNewSupplier) -> Self {
        Self {
            name: supplier.name.as_str(),
            contact_person: supplier.contact_person.as_deref(),
            phone: supplier.phone.as_deref(),
            email: supplier.email.as_deref(),
            address: supplier.address.as_deref(),
            tax_number: supplier.tax_number.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateSupplier> for UpdateSupplier<'a> {
    fn from(supplier: &'a DomainUpdateSupplier) -> Self {
        Self {
            name: supplier.name.as_str(),
            contact_person: supplier.contact_person.as_deref(),
            phone: supplier.phone.as_deref(),
            email: supplier.email.as_deref(),
            address: supplier.address.as_deref(),
            tax_number: supplier.tax_number.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
