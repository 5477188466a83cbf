//! Whole-table parsing.

use dctap_model::{Result, StructuralError, TapConfig, TapProfile, WarningCollector};
use dctap_validate::check_bounds;

use crate::config::validate_config;
use crate::header::HeaderClassifier;
use crate::normalize::{RowNormalizer, RowOutcome};

/// Row number of the first data row; the header is row 1.
pub const FIRST_DATA_ROW: usize = 2;

/// Parse a header row and data rows into a normalized profile.
///
/// Fails only on contradictory configuration or a structurally malformed
/// table. Everything else is reported in [`TapProfile::warnings`].
pub fn parse(headers: &[String], rows: &[Vec<String>], config: &TapConfig) -> Result<TapProfile> {
    validate_config(config)?;

    let span = tracing::debug_span!("parse", columns = headers.len(), rows = rows.len());
    let _guard = span.enter();

    let mut warnings = WarningCollector::new();
    let classified = HeaderClassifier::new(config).classify_all(headers, &mut warnings)?;

    let has_data = rows
        .iter()
        .any(|row| row.iter().any(|cell| !cell.trim().is_empty()));
    let has_property_column = classified
        .iter()
        .any(|header| header.element_name() == Some("propertyID"));
    if has_data && !has_property_column {
        return Err(StructuralError::MissingPropertyColumn.into());
    }

    let mut normalizer = RowNormalizer::new(&classified, config);
    let mut statements = Vec::new();
    for (offset, row) in rows.iter().enumerate() {
        if let RowOutcome::Statement(statement) =
            normalizer.normalize(FIRST_DATA_ROW + offset, row, &mut warnings)?
        {
            statements.push(statement);
        }
    }

    warnings.extend(check_bounds(
        &statements,
        normalizer.header_for("valueConstraint"),
    ));
    let shapes = normalizer.into_shapes();

    tracing::debug!(
        shapes = shapes.len(),
        statements = statements.len(),
        warnings = warnings.len(),
        "Parsed profile"
    );
    Ok(TapProfile {
        shapes,
        statements,
        warnings: warnings.into_vec(),
    })
}
