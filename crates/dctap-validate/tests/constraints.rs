//! Tests for value constraint validation.

use dctap_model::{ConstraintValue, WarningCode};
use dctap_validate::{ConstraintDeclaration, ConstraintValidator, Issue, split_items};

fn validate(constraint_type: &str, value: &str) -> (Option<ConstraintValue>, Vec<Issue>) {
    let mut validator = ConstraintValidator::default();
    let outcome = validator.validate(ConstraintDeclaration::new(
        Some(constraint_type),
        Some(value),
    ));
    (outcome.value, outcome.issues)
}

fn codes(issues: &[Issue]) -> Vec<WarningCode> {
    issues.iter().map(Issue::code).collect()
}

#[test]
fn valid_pattern_compiles() {
    let (value, issues) = validate("Pattern", r"^\d{4}-\d{2}$");
    assert!(issues.is_empty());
    assert_eq!(value, Some(ConstraintValue::Pattern(r"^\d{4}-\d{2}$".to_string())));
}

#[test]
fn broken_pattern_passes_through_with_warning() {
    let (value, issues) = validate("pattern", "([a-z]+");
    assert_eq!(codes(&issues), vec![WarningCode::UnparseablePattern]);
    assert!(issues[0].message().starts_with("unparseable pattern"));
    assert_eq!(value, Some(ConstraintValue::Unvalidated("([a-z]+".to_string())));
}

#[test]
fn picklist_splits_on_whitespace() {
    let (value, issues) = validate("Picklist", "red  green\tblue");
    assert!(issues.is_empty());
    assert_eq!(
        value,
        Some(ConstraintValue::Picklist(vec![
            "red".to_string(),
            "green".to_string(),
            "blue".to_string()
        ]))
    );
}

#[test]
fn picklist_with_custom_separator() {
    assert_eq!(
        split_items("New York | Los Angeles ||", "|"),
        vec!["New York".to_string(), "Los Angeles".to_string()]
    );
}

#[test]
fn empty_picklist_warns() {
    let mut validator = ConstraintValidator::default();
    let outcome = validator.validate(ConstraintDeclaration::new(Some("Picklist"), Some("   ")));
    assert_eq!(codes(&outcome.issues), vec![WarningCode::EmptyPicklist]);
    assert_eq!(outcome.value, None);

    let outcome = validator.validate(ConstraintDeclaration::new(Some("Picklist"), Some(",,")));
    // With the default whitespace separator, ",," is a single item.
    assert!(outcome.issues.is_empty());
}

#[test]
fn length_must_be_non_negative_integer() {
    let (value, issues) = validate("MinLength", "5");
    assert!(issues.is_empty());
    assert_eq!(value, Some(ConstraintValue::Length(5)));

    for bad in ["five", "-1", "+5", "2.5", "1e3"] {
        let (value, issues) = validate("MaxLength", bad);
        assert_eq!(codes(&issues), vec![WarningCode::NonNumericLength], "{bad}");
        assert!(issues[0].message().contains("non-numeric length constraint"));
        assert_eq!(value, Some(ConstraintValue::Unvalidated(bad.to_string())));
    }
}

#[test]
fn oversized_length_is_out_of_range_not_non_numeric() {
    let huge = "18446744073709551616";
    let (value, issues) = validate("MinLength", huge);
    assert_eq!(codes(&issues), vec![WarningCode::LengthOutOfRange]);
    assert!(issues[0].message().contains("out of range"));
    assert_eq!(value, Some(ConstraintValue::Unvalidated(huge.to_string())));

    let (value, issues) = validate("MaxLength", "18446744073709551615");
    assert!(issues.is_empty());
    assert_eq!(value, Some(ConstraintValue::Length(u64::MAX)));
}

#[test]
fn range_accepts_integers_and_decimals() {
    assert_eq!(validate("MinInclusive", "-3").0, Some(ConstraintValue::Number(-3.0)));
    assert_eq!(validate("MaxExclusive", "2.75").0, Some(ConstraintValue::Number(2.75)));
    assert!(validate("MaxInclusive", "1e3").1.is_empty());
}

#[test]
fn range_rejects_non_numbers() {
    for bad in ["abc", "NaN", "inf", "1,5"] {
        let (value, issues) = validate("MinInclusive", bad);
        assert_eq!(codes(&issues), vec![WarningCode::NonNumericRange], "{bad}");
        assert!(issues[0].message().contains("non-numeric range constraint"));
        assert_eq!(value, Some(ConstraintValue::Unvalidated(bad.to_string())));
    }
}

#[test]
fn language_tags() {
    let (value, issues) = validate("LanguageTag", "en fr-CA zh-Hant-TW");
    assert!(issues.is_empty());
    assert_eq!(
        value,
        Some(ConstraintValue::LanguageTags(vec![
            "en".to_string(),
            "fr-CA".to_string(),
            "zh-Hant-TW".to_string()
        ]))
    );

    let (value, issues) = validate("languageTag", "en english_uk");
    assert_eq!(
        issues,
        vec![Issue::MalformedLanguageTag {
            tags: vec!["english_uk".to_string()]
        }]
    );
    assert_eq!(value, Some(ConstraintValue::Unvalidated("en english_uk".to_string())));
}

#[test]
fn iri_stems() {
    let (value, issues) = validate("IRIstem", "http://example.org/ ex:");
    assert!(issues.is_empty());
    assert!(matches!(value, Some(ConstraintValue::IriStems(stems)) if stems.len() == 2));

    let (_, issues) = validate("IRIstem", "example.org");
    assert_eq!(codes(&issues), vec![WarningCode::MalformedIriStem]);
}

#[test]
fn unknown_type_warns_once_per_distinct_type() {
    let mut validator = ConstraintValidator::default();
    let first = validator.validate(ConstraintDeclaration::new(Some("Regex"), Some("a+")));
    let second = validator.validate(ConstraintDeclaration::new(Some("Regex"), Some("b+")));
    let other = validator.validate(ConstraintDeclaration::new(Some("Enum"), Some("x")));

    assert_eq!(codes(&first.issues), vec![WarningCode::UnrecognizedConstraintType]);
    assert!(second.issues.is_empty());
    assert_eq!(codes(&other.issues), vec![WarningCode::UnrecognizedConstraintType]);
    assert_eq!(second.value, Some(ConstraintValue::Unvalidated("b+".to_string())));
}

#[test]
fn bare_value_is_unvalidated_without_warning() {
    let mut validator = ConstraintValidator::default();
    let outcome = validator.validate(ConstraintDeclaration::new(None, Some("Book")));
    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.value, Some(ConstraintValue::Unvalidated("Book".to_string())));

    let outcome = validator.validate(ConstraintDeclaration::new(Some(" "), Some("")));
    assert_eq!(outcome, Default::default());
}

#[test]
fn type_without_value_warns() {
    let mut validator = ConstraintValidator::default();
    let outcome = validator.validate(ConstraintDeclaration::new(Some("MinLength"), None));
    assert_eq!(codes(&outcome.issues), vec![WarningCode::MissingConstraintValue]);
    assert_eq!(outcome.value, None);
}
