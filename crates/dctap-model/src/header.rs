//! Classified table headers.

use serde::Serialize;

use crate::element::{Element, ElementScope};

/// How a header was matched to the DCTAP vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderMatch {
    /// Canonical spelling.
    Exact,
    /// Mapped through a configured alias.
    Alias,
    /// Same letters, different case (`PropertyId`).
    CaseInsensitive,
    /// Same letters once spaces, underscores and dashes are dropped (`property_id`).
    NormalizedSpelling,
    /// Not a DCTAP element; listed in the expected extras.
    ExpectedExtra,
    /// Not a DCTAP element and not listed anywhere.
    UnrecognizedExtra,
}

/// One input column after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// 0-based column index.
    pub column: usize,
    /// Header text exactly as read.
    pub raw_text: String,
    /// Trimmed header text; extras are keyed by this, with case preserved.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<&'static Element>,
    pub matched: HeaderMatch,
    /// Scope of an extra column. `None` for DCTAP elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_scope: Option<ElementScope>,
}

impl Header {
    pub fn is_extra(&self) -> bool {
        self.element.is_none()
    }

    /// Canonical element name, if this column is a DCTAP element.
    pub fn element_name(&self) -> Option<&'static str> {
        self.element.map(|element| element.name)
    }

    /// Scope of the column's values, whether element or extra.
    pub fn scope(&self) -> ElementScope {
        match (self.element, self.extra_scope) {
            (Some(element), _) => element.scope,
            (None, Some(scope)) => scope,
            (None, None) => ElementScope::Statement,
        }
    }
}
