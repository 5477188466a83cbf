//! Profile warnings.
//!
//! Warnings are data, not log events: they describe problems in the profile
//! being read and are returned to the caller alongside the normalized model.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Warning severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Tolerated deviation, e.g. a header in nonstandard case.
    Notice,
    /// Likely mistake in the profile.
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Notice => "Notice",
            Self::Warning => "Warning",
        }
    }
}

/// Machine-readable warning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    // Header classification
    UnrecognizedHeader,
    NonstandardCase,
    NonstandardSpelling,

    // Value constraints
    UnparseablePattern,
    EmptyPicklist,
    NonNumericLength,
    LengthOutOfRange,
    NonNumericRange,
    MalformedLanguageTag,
    MalformedIriStem,
    UnrecognizedConstraintType,
    MissingConstraintValue,
    InvertedBounds,

    // Statement elements
    InvalidBoolean,
    UnrecognizedNodeType,
    DatatypeWithNonLiteral,
    ShapeWithLiteral,
    MissingPropertyId,
    ConflictingShapeLabel,

    // Table layout
    ValueWithoutHeader,
}

impl WarningCode {
    /// Default severity for this warning category.
    pub fn severity(&self) -> Severity {
        match self {
            Self::NonstandardCase | Self::NonstandardSpelling => Severity::Notice,
            _ => Severity::Warning,
        }
    }
}

/// One diagnostic about the profile.
///
/// `row` uses spreadsheet numbering: the header line is row 1 and the first
/// data row is row 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(rename = "shapeID", skip_serializing_if = "Option::is_none")]
    pub shape_id: Option<String>,
    pub code: WarningCode,
    pub severity: Severity,
    pub message: String,
}

impl Warning {
    pub fn new(code: WarningCode, row: usize, message: impl Into<String>) -> Self {
        Self {
            row,
            header: None,
            shape_id: None,
            code,
            severity: code.severity(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape_id: impl Into<String>) -> Self {
        self.shape_id = Some(shape_id.into());
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.row)?;
        if let Some(header) = &self.header {
            write!(f, ", column \"{header}\"")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Append-only, order-preserving warning sink for one parse.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Vec<Warning>,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn extend(&mut self, warnings: impl IntoIterator<Item = Warning>) {
        self.warnings.extend(warnings);
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.warnings
    }
}

/// Count warnings with the given severity.
pub fn count_severity(warnings: &[Warning], severity: Severity) -> usize {
    warnings
        .iter()
        .filter(|warning| warning.severity == severity)
        .count()
}

/// Group warnings by shape, keeping emission order within each group.
///
/// Warnings not tied to a shape (header warnings) are grouped under `""`.
pub fn warnings_by_shape(warnings: &[Warning]) -> BTreeMap<&str, Vec<&Warning>> {
    let mut grouped: BTreeMap<&str, Vec<&Warning>> = BTreeMap::new();
    for warning in warnings {
        let key = warning.shape_id.as_deref().unwrap_or("");
        grouped.entry(key).or_default().push(warning);
    }
    grouped
}
