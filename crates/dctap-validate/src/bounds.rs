//! Cross-statement bound checks.
//!
//! A property may appear on several rows of one shape, e.g. one row with
//! MinLength and another with MaxLength. The per-row validator cannot see
//! both, so this pass runs over the finished statement list.

use std::collections::BTreeMap;

use dctap_model::{ConstraintType, ConstraintValue, NormalizedStatement, Warning};

use crate::issue::Issue;

#[derive(Debug, Clone, Copy)]
struct Bound {
    row: usize,
    constraint_type: ConstraintType,
    value: f64,
}

#[derive(Debug, Default)]
struct PropertyBounds {
    min_length: Option<Bound>,
    max_length: Option<Bound>,
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl PropertyBounds {
    fn record(&mut self, bound: Bound) {
        let slot = match bound.constraint_type {
            ConstraintType::MinLength => &mut self.min_length,
            ConstraintType::MaxLength => &mut self.max_length,
            ConstraintType::MinInclusive | ConstraintType::MinExclusive => &mut self.lower,
            ConstraintType::MaxInclusive | ConstraintType::MaxExclusive => &mut self.upper,
            _ => return,
        };
        // First declaration wins, matching the order the author reads the table.
        slot.get_or_insert(bound);
    }
}

fn bound_of(statement: &NormalizedStatement) -> Option<Bound> {
    let constraint_type = ConstraintType::parse(statement.value_constraint_type.as_deref()?)?;
    let value = match statement.constraint.as_ref()? {
        ConstraintValue::Length(length) => *length as f64,
        ConstraintValue::Number(number) => *number,
        _ => return None,
    };
    Some(Bound {
        row: statement.row,
        constraint_type,
        value,
    })
}

fn is_empty_interval(lower: Bound, upper: Bound) -> bool {
    let exclusive = matches!(lower.constraint_type, ConstraintType::MinExclusive)
        || matches!(upper.constraint_type, ConstraintType::MaxExclusive);
    lower.value > upper.value || (exclusive && lower.value == upper.value)
}

fn format_bound(bound: Bound) -> String {
    if bound.value.fract() == 0.0 && bound.value.abs() < 1e15 {
        format!("{}", bound.value as i64)
    } else {
        bound.value.to_string()
    }
}

/// Warn where a lower bound exceeds an upper bound for the same property
/// of the same shape.
///
/// Only validated constraint values take part; unvalidated ones were
/// already reported by the row validator.
pub fn check_bounds(statements: &[NormalizedStatement], header: &str) -> Vec<Warning> {
    let mut grouped: BTreeMap<(&str, &str), PropertyBounds> = BTreeMap::new();
    for statement in statements {
        let Some(property) = statement.property_id.as_deref() else {
            continue;
        };
        if let Some(bound) = bound_of(statement) {
            grouped
                .entry((statement.shape_id.as_str(), property))
                .or_default()
                .record(bound);
        }
    }

    let mut warnings = Vec::new();
    for ((shape_id, property), bounds) in grouped {
        let pairs = [
            (bounds.min_length, bounds.max_length),
            (bounds.lower, bounds.upper),
        ];
        for (lower, upper) in pairs {
            let (Some(lower), Some(upper)) = (lower, upper) else {
                continue;
            };
            if !is_empty_interval(lower, upper) {
                continue;
            }
            let issue = Issue::InvertedBounds {
                property: property.to_string(),
                lower_type: lower.constraint_type.to_string(),
                lower: format_bound(lower),
                upper_type: upper.constraint_type.to_string(),
                upper: format_bound(upper),
            };
            warnings.push(
                issue
                    .into_warning(lower.row.max(upper.row), header)
                    .with_shape(shape_id),
            );
        }
    }
    warnings.sort_by_key(|warning| warning.row);
    warnings
}
