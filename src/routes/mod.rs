use actix_web::web;

pub mod dosage_form;
pub mod family;
pub mod location;
pub mod medicine;
pub mod packaging;
pub mod supplier;
pub mod unit;

/// Registers every `/api/v1` endpoint on the given scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(family::list_families)
        .service(family::get_family)
        .service(family::create_family)
        .service(family::update_family)
        .service(family::delete_family)
        .service(dosage_form::list_dosage_forms)
        .service(dosage_form::get_dosage_form)
        .service(dosage_form::create_dosage_form)
        .service(dosage_form::update_dosage_form)
        .service(dosage_form::delete_dosage_form)
        .service(unit::list_units)
        .service(unit::delete_units)
        .service(unit::get_unit)
        .service(unit::create_unit)
        .service(unit::update_unit)
        .service(unit::delete_unit)
        .service(medicine::list_medicines)
        .service(medicine::delete_medicines)
        .service(medicine::get_medicine)
        .service(medicine::create_medicine)
        .service(medicine::update_medicine)
        .service(medicine::delete_medicine)
        .service(medicine::create_medicine_packagings)
        .service(packaging::list_packagings)
        .service(packaging::get_packaging)
        .service(packaging::create_packaging)
        .service(packaging::delete_packaging)
        .service(supplier::list_suppliers)
        .service(supplier::get_supplier)
        .service(supplier::create_supplier)
        .service(supplier::update_supplier)
        .service(supplier::delete_supplier)
        .service(location::list_locations)
        .service(location::get_location)
        .service(location::create_location)
        .service(location::update_location)
        .service(location::delete_location);
}
