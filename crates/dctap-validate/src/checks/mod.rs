//! Value constraint checks.
//!
//! One module per constraint family. [`ConstraintValidator`] dispatches on
//! the declared `valueConstraintType` and never fails: a value that does not
//! satisfy its type is passed through as [`ConstraintValue::Unvalidated`]
//! together with an issue.

mod iri_stem;
mod language;
mod length;
mod pattern;
mod picklist;
mod range;

use std::collections::HashSet;

use dctap_model::{ConstraintType, ConstraintValue};

use crate::issue::Issue;

pub use language::is_language_tag;
pub use picklist::split_items;
pub use range::parse_number;

/// A `valueConstraintType` / `valueConstraint` pair read from one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintDeclaration<'a> {
    pub constraint_type: Option<&'a str>,
    pub value: Option<&'a str>,
}

impl<'a> ConstraintDeclaration<'a> {
    pub fn new(constraint_type: Option<&'a str>, value: Option<&'a str>) -> Self {
        Self {
            constraint_type: non_empty(constraint_type),
            value: non_empty(value),
        }
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

/// Result of validating one declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintOutcome {
    /// `None` when the row declares no constraint value.
    pub value: Option<ConstraintValue>,
    pub issues: Vec<Issue>,
}

impl ConstraintOutcome {
    fn valid(value: ConstraintValue) -> Self {
        Self {
            value: Some(value),
            issues: Vec::new(),
        }
    }

    fn fallback(raw: Option<&str>, issue: Option<Issue>) -> Self {
        Self {
            value: raw.map(|raw| ConstraintValue::Unvalidated(raw.to_string())),
            issues: issue.into_iter().collect(),
        }
    }

    fn from_check(raw: &str, result: Result<ConstraintValue, Issue>) -> Self {
        match result {
            Ok(value) => Self::valid(value),
            Err(issue) => Self::fallback(Some(raw), Some(issue)),
        }
    }
}

/// Per-parse constraint validator.
///
/// Holds the set of unknown constraint types already reported so each is
/// warned about only once per parse.
#[derive(Debug, Clone)]
pub struct ConstraintValidator {
    picklist_separator: String,
    reported_unknown: HashSet<String>,
}

impl Default for ConstraintValidator {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl ConstraintValidator {
    pub fn new(picklist_separator: impl Into<String>) -> Self {
        Self {
            picklist_separator: picklist_separator.into(),
            reported_unknown: HashSet::new(),
        }
    }

    pub fn validate(&mut self, declaration: ConstraintDeclaration<'_>) -> ConstraintOutcome {
        let raw = declaration.value;
        let Some(type_name) = declaration.constraint_type else {
            // A bare value is a literal the property must equal; nothing to check.
            return ConstraintOutcome::fallback(raw, None);
        };

        let Some(constraint_type) = ConstraintType::parse(type_name) else {
            let issue = self
                .reported_unknown
                .insert(type_name.to_string())
                .then(|| Issue::UnrecognizedConstraintType {
                    name: type_name.to_string(),
                });
            return ConstraintOutcome::fallback(raw, issue);
        };

        let Some(value) = raw else {
            let issue = match constraint_type {
                ConstraintType::Picklist => Issue::EmptyPicklist,
                _ => Issue::MissingConstraintValue {
                    constraint_type: type_name.to_string(),
                },
            };
            return ConstraintOutcome::fallback(None, Some(issue));
        };

        match constraint_type {
            ConstraintType::Pattern => ConstraintOutcome::from_check(value, pattern::check(value)),
            ConstraintType::Picklist => ConstraintOutcome::from_check(
                value,
                picklist::check(value, &self.picklist_separator),
            ),
            ConstraintType::MinLength | ConstraintType::MaxLength => {
                ConstraintOutcome::from_check(value, length::check(value))
            }
            ConstraintType::MinInclusive
            | ConstraintType::MaxInclusive
            | ConstraintType::MinExclusive
            | ConstraintType::MaxExclusive => {
                ConstraintOutcome::from_check(value, range::check(value))
            }
            ConstraintType::LanguageTag => {
                let (value, issue) = language::check(value);
                ConstraintOutcome {
                    value: Some(value),
                    issues: issue.into_iter().collect(),
                }
            }
            ConstraintType::IriStem => {
                let (value, issue) = iri_stem::check(value);
                ConstraintOutcome {
                    value: Some(value),
                    issues: issue.into_iter().collect(),
                }
            }
        }
    }
}
