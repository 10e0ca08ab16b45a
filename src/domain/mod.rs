pub mod dosage_form;
pub mod family;
pub mod location;
pub mod medicine;
pub mod packaging;
pub mod supplier;
pub mod unit;

/// Trims an optional free-text field, dropping values that are empty after
/// trimming.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
