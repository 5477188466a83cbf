//! MinLength / MaxLength: non-negative integers written as plain digits.

use dctap_model::ConstraintValue;

use crate::issue::Issue;

pub fn check(value: &str) -> Result<ConstraintValue, Issue> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Issue::NonNumericLength {
            value: value.to_string(),
        });
    }
    value
        .parse::<u64>()
        .map(ConstraintValue::Length)
        .map_err(|_| Issue::LengthOutOfRange {
            value: value.to_string(),
        })
}
