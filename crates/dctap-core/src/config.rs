//! Configuration loading and validation.
//!
//! Every [`TapConfig`] field has a default, so a partial file (or no file)
//! is valid. Contradictions are caught by [`validate_config`] before any
//! table is read.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use dctap_model::{ConfigError, STATEMENT_TEMPLATES_KEY, TapConfig};
use dctap_standards::registry;

/// File name written by `dctap init` and looked up by default.
pub const CONFIG_FILE_NAME: &str = "dctap.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Read a TOML config file.
///
/// The result is not validated; [`crate::parse`] does that before parsing.
pub fn load_config(path: &Path) -> Result<TapConfig, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&contents).map_err(|e| ConfigLoadError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Reject contradictory configuration.
pub fn validate_config(config: &TapConfig) -> Result<(), ConfigError> {
    if config.default_shape_name.trim().is_empty() {
        return Err(ConfigError::EmptyDefaultShape);
    }
    if config.picklist_item_separator.is_empty() {
        return Err(ConfigError::EmptyPicklistSeparator);
    }

    let registry = registry();
    for name in config.expected_extras() {
        let name = name.trim();
        if registry.is_element_name(name) {
            return Err(ConfigError::ExtraIsElement {
                name: name.to_string(),
            });
        }
    }

    // Scopes are assigned ignoring case.
    let shape_extras: BTreeSet<String> = config
        .extra_shape_elements
        .iter()
        .map(|name| name.trim().to_ascii_lowercase())
        .collect();
    if let Some(name) = config
        .extra_statement_elements
        .iter()
        .map(|name| name.as_str().trim())
        .find(|name| shape_extras.contains(&name.to_ascii_lowercase()))
    {
        return Err(ConfigError::ExtraInBothScopes {
            name: name.to_string(),
        });
    }
    if let Some(name) = config
        .extra_shape_elements
        .iter()
        .map(|name| name.as_str().trim())
        .find(|name| name.eq_ignore_ascii_case(STATEMENT_TEMPLATES_KEY))
    {
        return Err(ConfigError::ReservedShapeExtra {
            name: name.to_string(),
            reserved: STATEMENT_TEMPLATES_KEY,
        });
    }

    for (alias, target) in &config.element_aliases {
        if registry.lookup(target.trim()).is_none() {
            return Err(ConfigError::UnknownAliasTarget {
                alias: alias.clone(),
                target: target.clone(),
            });
        }
    }
    Ok(())
}

/// Commented default configuration, as written by `dctap init`.
pub fn default_config_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

const DEFAULT_CONFIG_TOML: &str = r#"# dctap configuration

# Shape ID for statements that appear before any shapeID value.
default_shape_name = "default"

# Non-DCTAP columns you expect. Shape extras are copied onto the shape,
# statement extras onto each statement.
extra_shape_elements = []
extra_statement_elements = []

# Warn about columns that are neither DCTAP elements nor listed above.
warn_on_unrecognized = true

# Warn about DCTAP headers such as "PropertyId" or "property_id".
warn_on_nonstandard_case = true

# Node types accepted in addition to IRI, literal and bnode.
extra_value_node_types = []

# Separator between picklist items. A single space means any whitespace.
picklist_item_separator = " "

# Alternative header names, e.g. "Property" = "propertyID".
[element_aliases]

# Print warnings to stderr for each output format.
[output]
text_warnings = false
json_warnings = false
yaml_warnings = false
"#;
