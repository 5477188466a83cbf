pub mod element;
pub mod error;
pub mod header;
pub mod options;
pub mod profile;
pub mod warning;

pub use element::{ConstraintType, Element, ElementKind, ElementScope};
pub use error::{ConfigError, DctapError, Result, StructuralError};
pub use header::{Header, HeaderMatch};
pub use options::{DEFAULT_SHAPE_NAME, OutputWarnings, TapConfig};
pub use profile::{
    ConstraintValue, Flag, NormalizedShape, NormalizedStatement, STATEMENT_TEMPLATES_KEY,
    TapProfile,
};
pub use warning::{
    Severity, Warning, WarningCode, WarningCollector, count_severity, warnings_by_shape,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display_includes_location() {
        let warning = Warning::new(WarningCode::NonNumericRange, 3, "non-numeric range constraint")
            .with_header("valueConstraint");
        assert_eq!(
            warning.to_string(),
            "row 3, column \"valueConstraint\": non-numeric range constraint"
        );
        assert_eq!(warning.severity, Severity::Warning);
    }

    #[test]
    fn statement_serializes_without_absent_fields() {
        let mut statement = NormalizedStatement {
            row: 2,
            shape_id: "default".to_string(),
            property_id: Some("dc:title".to_string()),
            mandatory: Some(Flag::Bool(true)),
            ..Default::default()
        };
        statement
            .extras
            .insert("My-Extra-Field".to_string(), "MixedCase".to_string());
        let json = serde_json::to_value(&statement).expect("serialize statement");
        assert_eq!(
            json,
            serde_json::json!({
                "propertyID": "dc:title",
                "mandatory": true,
                "My-Extra-Field": "MixedCase"
            })
        );
    }
}
