//! Indented plain-text listing of a profile.

use std::fmt::Write;

use dctap_model::{Flag, NormalizedStatement, TapProfile, Warning};

const INDENT: &str = "    ";
/// Width of the `label:` column, wide enough for `valueConstraintType:`.
const LABEL_WIDTH: usize = 22;

/// Render shapes and their statement templates for reading in a terminal.
pub fn to_text(profile: &TapProfile) -> String {
    let mut out = String::from("Tabular Application Profile (TAP)\n");
    for shape in &profile.shapes {
        line(&mut out, 1, "Shape", None);
        line(&mut out, 2, "shapeID", Some(&shape.shape_id));
        if let Some(label) = &shape.shape_label {
            line(&mut out, 2, "shapeLabel", Some(label));
        }
        for (name, value) in &shape.extras {
            line(&mut out, 2, name, Some(value));
        }
        for statement in profile.statements_for(&shape.shape_id) {
            line(&mut out, 2, "Statement Template", None);
            for (name, value) in statement_fields(statement) {
                line(&mut out, 3, name, Some(&value));
            }
        }
    }
    out
}

/// One line per warning, `row N, column "H": message`.
pub fn render_warnings(warnings: &[Warning]) -> String {
    let mut out = String::new();
    for warning in warnings {
        let _ = writeln!(out, "{warning}");
    }
    out
}

fn line(out: &mut String, depth: usize, label: &str, value: Option<&str>) {
    let indent = INDENT.repeat(depth);
    let _ = match value {
        Some(value) => writeln!(out, "{indent}{:<LABEL_WIDTH$}{value}", format!("{label}:")),
        None => writeln!(out, "{indent}{label}"),
    };
}

fn flag_text(flag: &Flag) -> String {
    match flag {
        Flag::Bool(value) => value.to_string(),
        Flag::Raw(raw) => raw.clone(),
    }
}

fn statement_fields(statement: &NormalizedStatement) -> Vec<(&str, String)> {
    let mut fields: Vec<(&str, String)> = Vec::new();
    let mut push = |name: &'static str, value: Option<String>| {
        if let Some(value) = value {
            fields.push((name, value));
        }
    };
    push("propertyID", statement.property_id.clone());
    push("propertyLabel", statement.property_label.clone());
    push("mandatory", statement.mandatory.as_ref().map(flag_text));
    push("repeatable", statement.repeatable.as_ref().map(flag_text));
    push("valueNodeType", statement.value_node_type.clone());
    push("valueDataType", statement.value_data_type.clone());
    push("valueConstraint", statement.value_constraint.clone());
    push("valueConstraintType", statement.value_constraint_type.clone());
    push("valueShape", statement.value_shape.clone());
    push("note", statement.note.clone());
    for (name, value) in &statement.extras {
        fields.push((name.as_str(), value.clone()));
    }
    fields
}
