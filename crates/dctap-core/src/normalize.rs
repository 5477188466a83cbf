//! Row normalization.
//!
//! Turns one data row into shape declarations and at most one statement.
//! Rows are never silently dropped: a row with statement content but no
//! propertyID still becomes a statement, with a warning.

use std::collections::{BTreeMap, HashMap};

use dctap_model::{
    ElementScope, Header, NormalizedShape, NormalizedStatement, StructuralError, TapConfig,
    Warning, WarningCode, WarningCollector,
};
use dctap_validate::{
    ConstraintDeclaration, ConstraintValidator, Issue, check_node_type_consistency,
    normalize_node_type, parse_flag,
};

/// What a row contributed to the profile.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// No content under any named column.
    Blank,
    /// Declared or described a shape without any statement content.
    ShapeOnly,
    Statement(NormalizedStatement),
}

/// Cell values of one row, sorted by destination.
#[derive(Default)]
struct RowCells<'r> {
    shape_id: Option<&'r str>,
    shape_label: Option<&'r str>,
    shape_extras: BTreeMap<String, String>,
    constraint_type: Option<&'r str>,
    constraint_value: Option<&'r str>,
    statement: NormalizedStatement,
    issues: Vec<(String, Issue)>,
    /// Non-empty cells under a blank header, as (0-based column, value).
    unheaded: Vec<(usize, &'r str)>,
}

impl RowCells<'_> {
    fn has_shape_content(&self) -> bool {
        self.shape_id.is_some() || self.shape_label.is_some() || !self.shape_extras.is_empty()
    }

    fn has_statement_content(&self) -> bool {
        self.statement != NormalizedStatement::default()
    }
}

/// Per-parse row normalizer.
///
/// Owns the shapes seen so far and the "current shape" that rows without a
/// shapeID continue.
#[derive(Debug)]
pub struct RowNormalizer<'a> {
    headers: &'a [Header],
    config: &'a TapConfig,
    validator: ConstraintValidator,
    shapes: Vec<NormalizedShape>,
    shape_index: HashMap<String, usize>,
    current_shape: Option<usize>,
    /// Column header text for each element present in the table.
    element_headers: HashMap<&'static str, &'a str>,
}

impl<'a> RowNormalizer<'a> {
    pub fn new(headers: &'a [Header], config: &'a TapConfig) -> Self {
        let element_headers = headers
            .iter()
            .filter_map(|header| {
                header
                    .element_name()
                    .map(|element| (element, header.name.as_str()))
            })
            .collect();
        Self {
            headers,
            config,
            validator: ConstraintValidator::new(config.picklist_item_separator.clone()),
            shapes: Vec::new(),
            shape_index: HashMap::new(),
            current_shape: None,
            element_headers,
        }
    }

    /// Column header for an element, falling back to its canonical name.
    pub fn header_for(&self, element: &'static str) -> &str {
        self.element_headers.get(element).copied().unwrap_or(element)
    }

    /// Normalize one data row. `row_number` uses spreadsheet numbering.
    pub fn normalize(
        &mut self,
        row_number: usize,
        row: &[String],
        warnings: &mut WarningCollector,
    ) -> Result<RowOutcome, StructuralError> {
        if row.len() > self.headers.len()
            && row[self.headers.len()..]
                .iter()
                .any(|cell| !cell.trim().is_empty())
        {
            return Err(StructuralError::RowTooWide {
                row: row_number,
                found: row.len(),
                expected: self.headers.len(),
            });
        }

        let mut cells = self.read_cells(row);
        if !cells.has_shape_content() && !cells.has_statement_content() {
            report_unheaded(&cells, row_number, None, warnings);
            return Ok(RowOutcome::Blank);
        }

        let shape = self.resolve_shape(cells.shape_id, row_number);
        let shape_id = self.shapes[shape].shape_id.clone();
        report_unheaded(&cells, row_number, Some(shape_id.as_str()), warnings);
        self.merge_shape_values(shape, &mut cells, row_number, warnings);

        if !cells.has_statement_content() {
            return Ok(RowOutcome::ShapeOnly);
        }

        let mut located: Vec<(String, Issue)> = std::mem::take(&mut cells.issues);
        let declaration = ConstraintDeclaration::new(cells.constraint_type, cells.constraint_value);
        if declaration.constraint_type.is_some() || declaration.value.is_some() {
            let outcome = self.validator.validate(declaration);
            cells.statement.constraint = outcome.value;
            for issue in outcome.issues {
                let header = self.constraint_issue_header(&issue, declaration);
                located.push((header.to_string(), issue));
            }
        }

        let mut statement = cells.statement;
        statement.row = row_number;
        statement.shape_id = shape_id.clone();

        for (element, issue) in check_node_type_consistency(&statement) {
            located.push((self.header_for(element).to_string(), issue));
        }
        for (header, issue) in located {
            warnings.push(issue.into_warning(row_number, &header).with_shape(&shape_id));
        }

        if statement.property_id.is_none() {
            warnings.push(
                Warning::new(
                    WarningCode::MissingPropertyId,
                    row_number,
                    "missing propertyID: statement has no property",
                )
                .with_header(self.header_for("propertyID"))
                .with_shape(&shape_id),
            );
        }
        Ok(RowOutcome::Statement(statement))
    }

    /// Shapes in order of first appearance.
    pub fn into_shapes(self) -> Vec<NormalizedShape> {
        self.shapes
    }

    fn read_cells<'r>(&self, row: &'r [String]) -> RowCells<'r> {
        let mut cells = RowCells::default();
        for header in self.headers {
            let raw = row.get(header.column).map(String::as_str).unwrap_or("");
            let value = raw.trim();
            if value.is_empty() {
                continue;
            }

            let Some(element) = header.element_name() else {
                if header.name.is_empty() {
                    cells.unheaded.push((header.column, value));
                    continue;
                }
                let extras = match header.scope() {
                    ElementScope::Shape => &mut cells.shape_extras,
                    ElementScope::Statement => &mut cells.statement.extras,
                };
                extras.insert(header.name.clone(), raw.to_string());
                continue;
            };

            let statement = &mut cells.statement;
            match element {
                "shapeID" => cells.shape_id = Some(value),
                "shapeLabel" => cells.shape_label = Some(value),
                "propertyID" => statement.property_id = Some(value.to_string()),
                "propertyLabel" => statement.property_label = Some(value.to_string()),
                "mandatory" | "repeatable" => {
                    let (flag, issue) = parse_flag(element, value);
                    if element == "mandatory" {
                        statement.mandatory = Some(flag);
                    } else {
                        statement.repeatable = Some(flag);
                    }
                    if let Some(issue) = issue {
                        cells.issues.push((header.name.clone(), issue));
                    }
                }
                "valueNodeType" => {
                    let (node_type, issue) =
                        normalize_node_type(value, &self.config.extra_value_node_types);
                    statement.value_node_type = Some(node_type);
                    if let Some(issue) = issue {
                        cells.issues.push((header.name.clone(), issue));
                    }
                }
                "valueDataType" => statement.value_data_type = Some(value.to_string()),
                "valueConstraint" => {
                    statement.value_constraint = Some(value.to_string());
                    cells.constraint_value = Some(value);
                }
                "valueConstraintType" => {
                    statement.value_constraint_type = Some(value.to_string());
                    cells.constraint_type = Some(value);
                }
                "valueShape" => statement.value_shape = Some(value.to_string()),
                "note" => statement.note = Some(value.to_string()),
                _ => {}
            }
        }
        cells
    }

    fn resolve_shape(&mut self, shape_id: Option<&str>, row_number: usize) -> usize {
        let index = match (shape_id, self.current_shape) {
            (Some(shape_id), _) => self.shape_named(shape_id, row_number),
            (None, Some(current)) => current,
            (None, None) => {
                let default = self.config.default_shape_name.trim().to_string();
                self.shape_named(&default, row_number)
            }
        };
        self.current_shape = Some(index);
        index
    }

    fn shape_named(&mut self, shape_id: &str, row_number: usize) -> usize {
        if let Some(&index) = self.shape_index.get(shape_id) {
            return index;
        }
        let index = self.shapes.len();
        self.shapes.push(NormalizedShape::new(shape_id, row_number));
        self.shape_index.insert(shape_id.to_string(), index);
        tracing::trace!(shape_id, row = row_number, "New shape");
        index
    }

    fn merge_shape_values(
        &mut self,
        index: usize,
        cells: &mut RowCells<'_>,
        row_number: usize,
        warnings: &mut WarningCollector,
    ) {
        let label_header = self.header_for("shapeLabel").to_string();
        let shape = &mut self.shapes[index];
        if let Some(label) = cells.shape_label {
            if shape.shape_label.is_none() {
                shape.shape_label = Some(label.to_string());
            } else if let Some(first) = &shape.shape_label
                && first != label
            {
                warnings.push(
                    Warning::new(
                        WarningCode::ConflictingShapeLabel,
                        row_number,
                        format!(
                            "conflicting shapeLabel \"{label}\" for shape {}: keeping \"{first}\"",
                            shape.shape_id
                        ),
                    )
                    .with_header(label_header)
                    .with_shape(&shape.shape_id),
                );
            }
        }
        for (name, value) in std::mem::take(&mut cells.shape_extras) {
            shape.extras.entry(name).or_insert(value);
        }
    }

    fn constraint_issue_header(
        &self,
        issue: &Issue,
        declaration: ConstraintDeclaration<'_>,
    ) -> &str {
        let type_header = self.header_for("valueConstraintType");
        match issue {
            Issue::UnrecognizedConstraintType { .. } => type_header,
            _ if declaration.value.is_some() => self.header_for("valueConstraint"),
            _ => type_header,
        }
    }
}

fn report_unheaded(
    cells: &RowCells<'_>,
    row_number: usize,
    shape_id: Option<&str>,
    warnings: &mut WarningCollector,
) {
    for &(column, value) in &cells.unheaded {
        let mut warning = Warning::new(
            WarningCode::ValueWithoutHeader,
            row_number,
            format!(
                "cell in column {} has no header; value \"{value}\" was not read",
                column + 1
            ),
        );
        if let Some(shape_id) = shape_id {
            warning = warning.with_shape(shape_id);
        }
        warnings.push(warning);
    }
}
