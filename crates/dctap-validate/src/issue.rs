//! Validation issue types.
//!
//! Each variant carries only its own data. Location (row, column, shape) is
//! attached by the caller when the issue becomes a [`Warning`].

use dctap_model::{Warning, WarningCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    // Value constraints
    UnparseablePattern { pattern: String, reason: String },
    EmptyPicklist,
    NonNumericLength { value: String },
    LengthOutOfRange { value: String },
    NonNumericRange { value: String },
    MalformedLanguageTag { tags: Vec<String> },
    MalformedIriStem { stems: Vec<String> },
    UnrecognizedConstraintType { name: String },
    MissingConstraintValue { constraint_type: String },
    InvertedBounds {
        property: String,
        lower_type: String,
        lower: String,
        upper_type: String,
        upper: String,
    },

    // Statement elements
    InvalidBoolean { element: &'static str, value: String },
    UnrecognizedNodeType { tokens: Vec<String> },
    DatatypeWithNonLiteral { datatype: String, node_type: String },
    ShapeWithLiteral { shape: String },
}

impl Issue {
    pub fn code(&self) -> WarningCode {
        match self {
            Issue::UnparseablePattern { .. } => WarningCode::UnparseablePattern,
            Issue::EmptyPicklist => WarningCode::EmptyPicklist,
            Issue::NonNumericLength { .. } => WarningCode::NonNumericLength,
            Issue::LengthOutOfRange { .. } => WarningCode::LengthOutOfRange,
            Issue::NonNumericRange { .. } => WarningCode::NonNumericRange,
            Issue::MalformedLanguageTag { .. } => WarningCode::MalformedLanguageTag,
            Issue::MalformedIriStem { .. } => WarningCode::MalformedIriStem,
            Issue::UnrecognizedConstraintType { .. } => WarningCode::UnrecognizedConstraintType,
            Issue::MissingConstraintValue { .. } => WarningCode::MissingConstraintValue,
            Issue::InvertedBounds { .. } => WarningCode::InvertedBounds,
            Issue::InvalidBoolean { .. } => WarningCode::InvalidBoolean,
            Issue::UnrecognizedNodeType { .. } => WarningCode::UnrecognizedNodeType,
            Issue::DatatypeWithNonLiteral { .. } => WarningCode::DatatypeWithNonLiteral,
            Issue::ShapeWithLiteral { .. } => WarningCode::ShapeWithLiteral,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::UnparseablePattern { pattern, reason } => {
                format!("unparseable pattern \"{pattern}\", kept unvalidated: {reason}")
            }
            Issue::EmptyPicklist => "empty picklist".to_string(),
            Issue::NonNumericLength { value } => format!(
                "non-numeric length constraint \"{value}\": expected a non-negative integer"
            ),
            Issue::LengthOutOfRange { value } => format!(
                "length constraint \"{value}\" is out of range: the largest supported length is {}",
                u64::MAX
            ),
            Issue::NonNumericRange { value } => {
                format!("non-numeric range constraint \"{value}\": expected a number")
            }
            Issue::MalformedLanguageTag { tags } => {
                format!("malformed language tag(s): {}", tags.join(", "))
            }
            Issue::MalformedIriStem { stems } => format!(
                "malformed IRI stem(s), expected an IRI or prefixed name: {}",
                stems.join(", ")
            ),
            Issue::UnrecognizedConstraintType { name } => {
                format!("unrecognized valueConstraintType \"{name}\", constraint kept unvalidated")
            }
            Issue::MissingConstraintValue { constraint_type } => format!(
                "valueConstraintType without valueConstraint: \"{constraint_type}\" has nothing to constrain"
            ),
            Issue::InvertedBounds {
                property,
                lower_type,
                lower,
                upper_type,
                upper,
            } => format!(
                "{lower_type} {lower} conflicts with {upper_type} {upper} for property {property}: no value satisfies both"
            ),
            Issue::InvalidBoolean { element, value } => format!(
                "{element} value \"{value}\" is not a recognized boolean (true/false, yes/no, 1/0)"
            ),
            Issue::UnrecognizedNodeType { tokens } => {
                format!("unrecognized valueNodeType: {}", tokens.join(", "))
            }
            Issue::DatatypeWithNonLiteral {
                datatype,
                node_type,
            } => format!(
                "datatype with non-literal node type: valueDataType {datatype} has no effect on {node_type} values"
            ),
            Issue::ShapeWithLiteral { shape } => format!(
                "value shape with literal node type: literals cannot conform to shape {shape}"
            ),
        }
    }

    /// Attach a location and turn the issue into a warning.
    pub fn into_warning(self, row: usize, header: &str) -> Warning {
        Warning::new(self.code(), row, self.message()).with_header(header)
    }
}
