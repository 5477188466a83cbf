//! Pattern constraints: the value must compile as a regular expression.

use dctap_model::ConstraintValue;
use regex::Regex;

use crate::issue::Issue;

pub fn check(value: &str) -> Result<ConstraintValue, Issue> {
    match Regex::new(value) {
        Ok(_) => Ok(ConstraintValue::Pattern(value.to_string())),
        Err(error) => Err(Issue::UnparseablePattern {
            pattern: value.to_string(),
            reason: first_line(&error.to_string()),
        }),
    }
}

// regex errors render a multi-line caret diagram; keep the summary line.
fn first_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .rfind(|line| line.starts_with("error:"))
        .or_else(|| text.lines().next())
        .unwrap_or_default()
        .trim_start_matches("error:")
        .trim()
        .to_string()
}
