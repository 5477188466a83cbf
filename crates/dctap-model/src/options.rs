//! Configuration options for reading DCTAP profiles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Shape name used for statements that appear before any shapeID.
pub const DEFAULT_SHAPE_NAME: &str = "default";

/// Per-output-mode warning switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputWarnings {
    /// Print warnings to stderr when emitting plain text.
    pub text_warnings: bool,
    /// Print warnings to stderr when emitting JSON.
    pub json_warnings: bool,
    /// Print warnings to stderr when emitting YAML.
    pub yaml_warnings: bool,
}

/// Options controlling header classification and warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapConfig {
    /// Shape ID assigned to statements that precede any shapeID.
    pub default_shape_name: String,

    /// Extra columns expected at shape level (copied onto the shape).
    pub extra_shape_elements: Vec<String>,

    /// Extra columns expected at statement level.
    pub extra_statement_elements: Vec<String>,

    /// Warn about columns that are neither DCTAP elements nor expected extras.
    pub warn_on_unrecognized: bool,

    /// Warn about DCTAP headers written in nonstandard case or spelling.
    pub warn_on_nonstandard_case: bool,

    /// Alternative header names mapped to canonical element names.
    ///
    /// Keys are compared ignoring case, spaces, underscores and dashes.
    pub element_aliases: BTreeMap<String, String>,

    /// Node types accepted in addition to IRI, literal and bnode.
    pub extra_value_node_types: Vec<String>,

    /// Separator between picklist items. A single space means "any whitespace".
    pub picklist_item_separator: String,

    /// Which output modes print warnings.
    pub output: OutputWarnings,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            default_shape_name: DEFAULT_SHAPE_NAME.to_string(),
            extra_shape_elements: Vec::new(),
            extra_statement_elements: Vec::new(),
            warn_on_unrecognized: true,
            warn_on_nonstandard_case: true,
            element_aliases: BTreeMap::new(),
            extra_value_node_types: Vec::new(),
            picklist_item_separator: " ".to_string(),
            output: OutputWarnings::default(),
        }
    }
}

impl TapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_shape_extras<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_shape_elements = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_statement_extras<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_statement_elements = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, element: impl Into<String>) -> Self {
        self.element_aliases.insert(alias.into(), element.into());
        self
    }

    #[must_use]
    pub fn with_warn_on_unrecognized(mut self, enable: bool) -> Self {
        self.warn_on_unrecognized = enable;
        self
    }

    #[must_use]
    pub fn with_warn_on_nonstandard_case(mut self, enable: bool) -> Self {
        self.warn_on_nonstandard_case = enable;
        self
    }

    #[must_use]
    pub fn with_default_shape_name(mut self, name: impl Into<String>) -> Self {
        self.default_shape_name = name.into();
        self
    }

    /// All expected extras, shape-level first.
    pub fn expected_extras(&self) -> impl Iterator<Item = &str> {
        self.extra_shape_elements
            .iter()
            .chain(self.extra_statement_elements.iter())
            .map(String::as_str)
    }

    /// True when picklist items are split on any whitespace.
    pub fn picklist_splits_on_whitespace(&self) -> bool {
        self.picklist_item_separator.trim().is_empty()
    }
}
