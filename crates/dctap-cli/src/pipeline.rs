//! Read pipeline: config resolution, ingest, parse.
//!
//! Kept in the library so the stages can be exercised without the binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use dctap_core::{CONFIG_FILE_NAME, default_config_toml, load_config, parse};
use dctap_ingest::{IngestOptions, read_table};
use dctap_model::{Severity, TapConfig, TapProfile, count_severity};
use dctap_output::OutputFormat;

/// Load `explicit` if given, else `dctap.toml` in `dir` if present, else
/// the defaults.
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<TapConfig> {
    if let Some(path) = explicit {
        return load_config(path).context("load config");
    }
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        debug!(path = %candidate.display(), "Using config file from working directory");
        return load_config(&candidate).context("load config");
    }
    debug!("No config file, using defaults");
    Ok(TapConfig::default())
}

/// Read and parse one table.
pub fn read_profile(path: &Path, config: &TapConfig, options: &IngestOptions) -> Result<TapProfile> {
    let span = info_span!("read", path = %path.display());
    let _guard = span.enter();

    let table = read_table(path, options).context("read table")?;
    let profile = parse(&table.headers, &table.rows, config)
        .with_context(|| format!("parse {}", path.display()))?;

    info!(
        shapes = profile.shapes.len(),
        statements = profile.statements.len(),
        warnings = count_severity(&profile.warnings, Severity::Warning),
        notices = count_severity(&profile.warnings, Severity::Notice),
        "Profile read"
    );
    Ok(profile)
}

/// Whether warnings go to stderr for this output format.
pub fn warnings_enabled(config: &TapConfig, format: OutputFormat, requested: bool) -> bool {
    requested
        || match format {
            OutputFormat::Text => config.output.text_warnings,
            OutputFormat::Json => config.output.json_warnings,
            OutputFormat::Yaml => config.output.yaml_warnings,
        }
}

/// Parse a `--delimiter` value: one ASCII character, or `tab` / `\t`.
pub fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
                _ => Err(format!(
                    "expected a single ASCII character or \"tab\", got \"{value}\""
                )),
            }
        }
    }
}

/// Write the commented default configuration.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    std::fs::write(path, default_config_toml())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "Wrote default config");
    Ok(path.to_path_buf())
}
