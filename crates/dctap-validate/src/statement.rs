//! Checks on statement elements other than the value constraint.

use dctap_model::{Flag, NormalizedStatement};
use dctap_standards::NODE_TYPES;

use crate::issue::Issue;

/// Interpret a `mandatory` / `repeatable` cell.
pub fn parse_flag(element: &'static str, raw: &str) -> (Flag, Option<Issue>) {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => (Flag::Bool(true), None),
        "false" | "no" | "n" | "0" => (Flag::Bool(false), None),
        _ => (
            Flag::Raw(raw.to_string()),
            Some(Issue::InvalidBoolean {
                element,
                value: raw.to_string(),
            }),
        ),
    }
}

/// Normalize a `valueNodeType` cell.
///
/// Built-in types are lower-cased (`IRI` becomes `iri`); configured extra
/// types keep their configured spelling; unknown tokens are kept verbatim.
pub fn normalize_node_type(raw: &str, extra_node_types: &[String]) -> (String, Option<Issue>) {
    let mut tokens = Vec::new();
    let mut unknown = Vec::new();
    for token in raw.split_whitespace() {
        if let Some(known) = NODE_TYPES
            .iter()
            .find(|known| known.eq_ignore_ascii_case(token))
        {
            tokens.push((*known).to_string());
        } else if let Some(extra) = extra_node_types
            .iter()
            .find(|extra| extra.eq_ignore_ascii_case(token))
        {
            tokens.push(extra.clone());
        } else {
            tokens.push(token.to_string());
            unknown.push(token.to_string());
        }
    }
    let issue = (!unknown.is_empty()).then_some(Issue::UnrecognizedNodeType { tokens: unknown });
    (tokens.join(" "), issue)
}

/// Consistency of valueNodeType with valueDataType and valueShape.
///
/// Returns each issue with the element it should be reported against.
pub fn check_node_type_consistency(
    statement: &NormalizedStatement,
) -> Vec<(&'static str, Issue)> {
    let mut issues = Vec::new();
    let Some(node_type) = statement.value_node_type.as_deref() else {
        return issues;
    };
    let types: Vec<&str> = statement.node_types().collect();
    let allows_literal = types.iter().any(|t| t.eq_ignore_ascii_case("literal"));

    if let Some(datatype) = &statement.value_data_type
        && !allows_literal
    {
        issues.push((
            "valueDataType",
            Issue::DatatypeWithNonLiteral {
                datatype: datatype.clone(),
                node_type: node_type.to_string(),
            },
        ));
    }

    let only_literal = !types.is_empty() && types.iter().all(|t| t.eq_ignore_ascii_case("literal"));
    if let Some(shape) = &statement.value_shape
        && only_literal
    {
        issues.push((
            "valueShape",
            Issue::ShapeWithLiteral {
                shape: shape.clone(),
            },
        ));
    }
    issues
}
