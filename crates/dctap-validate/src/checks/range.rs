//! Min/Max Inclusive/Exclusive: integer or decimal numbers.

use dctap_model::ConstraintValue;

use crate::issue::Issue;

pub fn check(value: &str) -> Result<ConstraintValue, Issue> {
    parse_number(value)
        .map(ConstraintValue::Number)
        .ok_or_else(|| Issue::NonNumericRange {
            value: value.to_string(),
        })
}

/// Parse a finite decimal number. `inf`, `NaN` and friends are rejected.
pub fn parse_number(value: &str) -> Option<f64> {
    if !value.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    value.parse::<f64>().ok().filter(|number| number.is_finite())
}
