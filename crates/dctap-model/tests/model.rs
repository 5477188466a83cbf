//! Tests for dctap-model types.

use dctap_model::{
    ConstraintType, Severity, TapConfig, Warning, WarningCode, count_severity, warnings_by_shape,
};

#[test]
fn constraint_type_parse_ignores_case() {
    assert_eq!(ConstraintType::parse("picklist"), Some(ConstraintType::Picklist));
    assert_eq!(ConstraintType::parse(" MinLength "), Some(ConstraintType::MinLength));
    assert_eq!(ConstraintType::parse("iristem"), Some(ConstraintType::IriStem));
    assert_eq!(ConstraintType::parse("languagetag"), Some(ConstraintType::LanguageTag));
    assert_eq!(ConstraintType::parse("regex"), None);
    assert_eq!(ConstraintType::parse(""), None);
}

#[test]
fn constraint_type_families() {
    assert!(ConstraintType::MaxLength.is_length());
    assert!(!ConstraintType::MaxLength.is_range());
    assert!(ConstraintType::MinExclusive.is_range());
    assert!(ConstraintType::MinExclusive.is_lower_bound());
    assert!(!ConstraintType::MaxInclusive.is_lower_bound());
}

#[test]
fn nonstandard_case_is_a_notice() {
    assert_eq!(WarningCode::NonstandardCase.severity(), Severity::Notice);
    assert_eq!(WarningCode::UnrecognizedHeader.severity(), Severity::Warning);
}

#[test]
fn severity_counts_and_shape_grouping() {
    let warnings = vec![
        Warning::new(WarningCode::NonstandardCase, 1, "nonstandard case").with_header("PropertyID"),
        Warning::new(WarningCode::EmptyPicklist, 2, "empty picklist").with_shape("book"),
        Warning::new(WarningCode::NonNumericLength, 3, "non-numeric length constraint")
            .with_shape("author"),
        Warning::new(WarningCode::InvalidBoolean, 4, "not a recognized boolean").with_shape("book"),
    ];

    assert_eq!(count_severity(&warnings, Severity::Notice), 1);
    assert_eq!(count_severity(&warnings, Severity::Warning), 3);

    let grouped = warnings_by_shape(&warnings);
    assert_eq!(grouped.len(), 3);
    assert_eq!(grouped[""].len(), 1);
    let book: Vec<usize> = grouped["book"].iter().map(|warning| warning.row).collect();
    assert_eq!(book, vec![2, 4]);
}

#[test]
fn config_defaults_fill_missing_fields() {
    let config: TapConfig =
        serde_json::from_str(r#"{"extra_statement_elements": ["Note"]}"#).expect("config");
    assert_eq!(config.default_shape_name, "default");
    assert!(config.warn_on_unrecognized);
    assert!(config.warn_on_nonstandard_case);
    assert!(config.picklist_splits_on_whitespace());
    assert_eq!(config.expected_extras().collect::<Vec<_>>(), vec!["Note"]);
}

#[test]
fn config_builders() {
    let config = TapConfig::new()
        .with_shape_extras(["closed"])
        .with_statement_extras(["severity"])
        .with_alias("Property", "propertyID")
        .with_warn_on_unrecognized(false)
        .with_default_shape_name("main");
    assert_eq!(
        config.expected_extras().collect::<Vec<_>>(),
        vec!["closed", "severity"]
    );
    assert_eq!(config.element_aliases["Property"], "propertyID");
    assert!(!config.warn_on_unrecognized);
    assert_eq!(config.default_shape_name, "main");
}
