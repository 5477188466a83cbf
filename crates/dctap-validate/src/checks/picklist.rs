//! Picklist constraints: a set of allowed literal values.

use dctap_model::ConstraintValue;

use crate::issue::Issue;

pub fn check(value: &str, separator: &str) -> Result<ConstraintValue, Issue> {
    let items = split_items(value, separator);
    if items.is_empty() {
        return Err(Issue::EmptyPicklist);
    }
    Ok(ConstraintValue::Picklist(items))
}

/// Split picklist text into trimmed, non-empty items.
///
/// A blank separator splits on any run of whitespace.
pub fn split_items(value: &str, separator: &str) -> Vec<String> {
    if separator.trim().is_empty() {
        return value.split_whitespace().map(str::to_string).collect();
    }
    value
        .split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
