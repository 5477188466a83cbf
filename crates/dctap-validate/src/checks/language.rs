//! LanguageTag constraints.
//!
//! Only the basic tag shape is checked (`en`, `en-GB`, `zh-Hant-TW`), not
//! registry membership.

use std::sync::LazyLock;

use dctap_model::ConstraintValue;
use regex::Regex;

use crate::issue::Issue;

static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").expect("language tag regex")
});

pub fn is_language_tag(tag: &str) -> bool {
    LANGUAGE_TAG.is_match(tag)
}

/// Tags are whitespace-separated. Malformed tags are reported but the
/// constraint is still kept.
pub fn check(value: &str) -> (ConstraintValue, Option<Issue>) {
    let tags: Vec<String> = value.split_whitespace().map(str::to_string).collect();
    let malformed: Vec<String> = tags
        .iter()
        .filter(|tag| !is_language_tag(tag))
        .cloned()
        .collect();
    if malformed.is_empty() {
        (ConstraintValue::LanguageTags(tags), None)
    } else {
        (
            ConstraintValue::Unvalidated(value.to_string()),
            Some(Issue::MalformedLanguageTag { tags: malformed }),
        )
    }
}
