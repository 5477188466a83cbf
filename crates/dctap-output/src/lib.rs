//! Rendering of normalized DCTAP profiles.
//!
//! JSON and YAML share one document layout:
//!
//! ```text
//! shapes:
//!   - shapeID, shapeLabel?, <shape extras>
//!     statement_templates:
//!       - propertyID?, ..., <statement extras>
//! warnings?          (only when requested)
//! ```
//!
//! Absent values are omitted and extras keep the header text as written.

mod error;
mod payload;
mod text;

use dctap_model::TapProfile;

pub use error::{OutputError, Result};
pub use text::{render_warnings, to_text};

use payload::ProfilePayload;

/// Output format selected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Embed the warning list in the document.
    pub include_warnings: bool,
}

impl OutputOptions {
    #[must_use]
    pub fn with_warnings(mut self, include: bool) -> Self {
        self.include_warnings = include;
        self
    }
}

/// Pretty-printed JSON, with a trailing newline.
pub fn to_json(profile: &TapProfile, options: &OutputOptions) -> Result<String> {
    let payload = ProfilePayload::new(profile, options.include_warnings);
    let json = serde_json::to_string_pretty(&payload)?;
    Ok(format!("{json}\n"))
}

pub fn to_yaml(profile: &TapProfile, options: &OutputOptions) -> Result<String> {
    let payload = ProfilePayload::new(profile, options.include_warnings);
    Ok(serde_yaml::to_string(&payload)?)
}

/// Render in the given format. Text output never embeds warnings.
pub fn render(profile: &TapProfile, format: OutputFormat, options: &OutputOptions) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(to_text(profile)),
        OutputFormat::Json => to_json(profile, options),
        OutputFormat::Yaml => to_yaml(profile, options),
    }
}
