//! IRIstem constraints: each stem is an IRI or a prefixed name.

use std::sync::LazyLock;

use dctap_model::ConstraintValue;
use regex::Regex;

use crate::issue::Issue;

static IRI_STEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-_]*)?:\S*$").expect("iri stem regex")
});

pub fn check(value: &str) -> (ConstraintValue, Option<Issue>) {
    let stems: Vec<String> = value.split_whitespace().map(str::to_string).collect();
    let malformed: Vec<String> = stems
        .iter()
        .filter(|stem| !IRI_STEM.is_match(stem))
        .cloned()
        .collect();
    if malformed.is_empty() {
        (ConstraintValue::IriStems(stems), None)
    } else {
        (
            ConstraintValue::Unvalidated(value.to_string()),
            Some(Issue::MalformedIriStem { stems: malformed }),
        )
    }
}
