//! DCTAP element and constraint type definitions.
//!
//! These types describe the vocabulary itself. The registry that enumerates
//! them lives in `dctap-standards`.

use std::fmt;

use serde::Serialize;

/// Where an element's value belongs in the normalized profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementScope {
    /// Describes the shape as a whole (shapeID, shapeLabel).
    Shape,
    /// Describes one property statement within a shape.
    Statement,
}

impl ElementScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Statement => "statement",
        }
    }
}

impl fmt::Display for ElementScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected kind of value carried by an element's column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// IRI, prefixed name or local identifier.
    Identifier,
    /// Human-readable label.
    Label,
    /// true/false style flag.
    Boolean,
    /// IRI, literal or bnode.
    NodeType,
    /// Name of a value constraint type (Pattern, Picklist, ...).
    ConstraintType,
    /// Parameter of a value constraint, interpreted per constraint type.
    ConstraintValue,
    /// Free text, never interpreted.
    FreeText,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Label => "label",
            Self::Boolean => "boolean",
            Self::NodeType => "node-type",
            Self::ConstraintType => "constraint-type",
            Self::ConstraintValue => "constraint-value",
            Self::FreeText => "free-text",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized DCTAP column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Element {
    /// Canonical spelling, e.g. `propertyID`.
    pub name: &'static str,
    pub scope: ElementScope,
    pub kind: ElementKind,
    /// One-line description shown by `dctap elements`.
    pub description: &'static str,
}

/// Value constraint types recognized by the validator.
///
/// Type names are matched case-insensitively; [`ConstraintType::as_str`]
/// gives the canonical spelling. Normalized statements keep the type text
/// as the author wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ConstraintType {
    Picklist,
    #[serde(rename = "IRIstem")]
    IriStem,
    Pattern,
    LanguageTag,
    MinLength,
    MaxLength,
    MinInclusive,
    MaxInclusive,
    MinExclusive,
    MaxExclusive,
}

impl ConstraintType {
    pub const ALL: [ConstraintType; 10] = [
        Self::Picklist,
        Self::IriStem,
        Self::Pattern,
        Self::LanguageTag,
        Self::MinLength,
        Self::MaxLength,
        Self::MinInclusive,
        Self::MaxInclusive,
        Self::MinExclusive,
        Self::MaxExclusive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Picklist => "Picklist",
            Self::IriStem => "IRIstem",
            Self::Pattern => "Pattern",
            Self::LanguageTag => "LanguageTag",
            Self::MinLength => "MinLength",
            Self::MaxLength => "MaxLength",
            Self::MinInclusive => "MinInclusive",
            Self::MaxInclusive => "MaxInclusive",
            Self::MinExclusive => "MinExclusive",
            Self::MaxExclusive => "MaxExclusive",
        }
    }

    /// Parse a constraint type name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
    }

    pub fn is_length(&self) -> bool {
        matches!(self, Self::MinLength | Self::MaxLength)
    }

    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Self::MinInclusive | Self::MaxInclusive | Self::MinExclusive | Self::MaxExclusive
        )
    }

    /// Lower bound types (MinLength, MinInclusive, MinExclusive).
    pub fn is_lower_bound(&self) -> bool {
        matches!(
            self,
            Self::MinLength | Self::MinInclusive | Self::MinExclusive
        )
    }

    /// One-line description shown by `dctap elements`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Picklist => "Whitespace-separated list of allowed literal values",
            Self::IriStem => "IRI stem(s) the value must start with",
            Self::Pattern => "Regular expression the value must match",
            Self::LanguageTag => "Allowed language tag(s) for a language-tagged literal",
            Self::MinLength => "Minimum string length (non-negative integer)",
            Self::MaxLength => "Maximum string length (non-negative integer)",
            Self::MinInclusive => "Inclusive numeric lower bound",
            Self::MaxInclusive => "Inclusive numeric upper bound",
            Self::MinExclusive => "Exclusive numeric lower bound",
            Self::MaxExclusive => "Exclusive numeric upper bound",
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
