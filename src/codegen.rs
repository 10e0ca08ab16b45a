//! Sequential product code generation.
//!
//! A code is a prefix derived from the medicine name plus a zero-padded
//! sequence number: `Paracétamol` becomes `PAR001`, the next paracetamol
//! variant `PAR002`, and so on. The counter never reuses freed numbers.

use deunicode::deunicode;

/// Strips diacritics and keeps only ASCII alphanumerics.
fn clean_name(name: &str) -> String {
    deunicode(name)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// First three alphanumeric characters of the cleaned name, uppercased.
/// Names shorter than three characters yield a shorter prefix.
pub fn code_prefix(name: &str) -> String {
    clean_name(name).chars().take(3).collect::<String>().to_uppercase()
}

/// Computes the next code for `prefix` given every existing code that starts
/// with it. The suffix starts after the third character; codes too short to
/// carry one count as zero.
pub fn next_code(prefix: &str, existing: &[String]) -> String {
    let max_suffix = existing
        .iter()
        .filter_map(|code| code.get(3..))
        .filter_map(|suffix| suffix.parse::<i64>().ok())
        .max()
        .unwrap_or(0);

    format!("{prefix}{:03}", max_suffix + 1)
}
