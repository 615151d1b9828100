//! Parsing of path operands. A comma is accepted as the decimal separator.

use super::operations::MathError;

/// Optional sign, digits, and at most one decimal separator followed by digits.
pub fn is_numeric(value: &str) -> bool {
    let value = value.replace(',', ".");
    let digits = value.strip_prefix(['+', '-']).unwrap_or(&value);

    let mut seen_digit = false;
    let mut seen_separator = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_separator => seen_separator = true,
            _ => return false,
        }
    }

    seen_digit && !digits.ends_with('.')
}

pub fn convert_to_double(value: &str) -> Result<f64, MathError> {
    if !is_numeric(value) {
        return Err(MathError::NotNumeric);
    }
    value
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| MathError::NotNumeric)
}
