//! Normalized profile model.
//!
//! Absent values are `None`, never empty strings. Serialization skips them so
//! JSON/YAML output carries only what the table supplied.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::warning::Warning;

/// Document key under which a shape's statements are nested. Shape extras
/// share that object, so no shape extra may use this name.
pub const STATEMENT_TEMPLATES_KEY: &str = "statement_templates";

/// A boolean element value (`mandatory`, `repeatable`).
///
/// Values that are not recognizable booleans are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Raw(String),
}

impl Flag {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Raw(_) => None,
        }
    }
}

/// Typed interpretation of a `valueConstraint`, or the raw fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ConstraintValue {
    /// Regular expression that compiled.
    Pattern(String),
    Picklist(Vec<String>),
    Length(u64),
    Number(f64),
    LanguageTags(Vec<String>),
    IriStems(Vec<String>),
    /// Kept as written: no type, an unknown type, or a value that failed its
    /// type's validation.
    Unvalidated(String),
}

impl ConstraintValue {
    pub fn is_validated(&self) -> bool {
        !matches!(self, Self::Unvalidated(_))
    }
}

/// A shape and its shape-level values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedShape {
    #[serde(rename = "shapeID")]
    pub shape_id: String,
    #[serde(rename = "shapeLabel", skip_serializing_if = "Option::is_none")]
    pub shape_label: Option<String>,
    #[serde(flatten)]
    pub extras: BTreeMap<String, String>,
    /// Row that introduced the shape. Rows are 1-based with the header on row 1.
    #[serde(skip)]
    pub row: usize,
}

impl NormalizedShape {
    pub fn new(shape_id: impl Into<String>, row: usize) -> Self {
        Self {
            shape_id: shape_id.into(),
            shape_label: None,
            extras: BTreeMap::new(),
            row,
        }
    }
}

/// One property statement (statement template).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NormalizedStatement {
    #[serde(skip)]
    pub row: usize,
    #[serde(skip)]
    pub shape_id: String,
    #[serde(rename = "propertyID", skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(rename = "propertyLabel", skip_serializing_if = "Option::is_none")]
    pub property_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<Flag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeatable: Option<Flag>,
    #[serde(rename = "valueNodeType", skip_serializing_if = "Option::is_none")]
    pub value_node_type: Option<String>,
    #[serde(rename = "valueDataType", skip_serializing_if = "Option::is_none")]
    pub value_data_type: Option<String>,
    #[serde(rename = "valueConstraint", skip_serializing_if = "Option::is_none")]
    pub value_constraint: Option<String>,
    #[serde(rename = "valueConstraintType", skip_serializing_if = "Option::is_none")]
    pub value_constraint_type: Option<String>,
    /// Typed view of `value_constraint`; the raw text above is authoritative.
    #[serde(skip)]
    pub constraint: Option<ConstraintValue>,
    #[serde(rename = "valueShape", skip_serializing_if = "Option::is_none")]
    pub value_shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub extras: BTreeMap<String, String>,
}

impl NormalizedStatement {
    /// Node type tokens, lower-cased for the built-in types.
    pub fn node_types(&self) -> impl Iterator<Item = &str> {
        self.value_node_type
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
    }
}

/// Result of parsing one table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TapProfile {
    /// Shapes in order of first appearance.
    pub shapes: Vec<NormalizedShape>,
    /// Statements in row order.
    pub statements: Vec<NormalizedStatement>,
    /// Warnings in emission order.
    pub warnings: Vec<Warning>,
}

impl TapProfile {
    pub fn shape(&self, shape_id: &str) -> Option<&NormalizedShape> {
        self.shapes.iter().find(|shape| shape.shape_id == shape_id)
    }

    /// Statements belonging to a shape, in row order.
    pub fn statements_for<'a>(
        &'a self,
        shape_id: &'a str,
    ) -> impl Iterator<Item = &'a NormalizedStatement> + 'a {
        self.statements
            .iter()
            .filter(move |statement| statement.shape_id == shape_id)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
