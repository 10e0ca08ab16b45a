pub mod config;
pub mod dosage_form;
pub mod family;
pub mod location;
pub mod medicine;
pub mod packaging;
pub mod supplier;
pub mod unit;
