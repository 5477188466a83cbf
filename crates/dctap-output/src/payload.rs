//! Serialized document layout.
//!
//! Statements are stored flat on [`TapProfile`]; the document nests them
//! under their shape as `statement_templates`.

use serde::Serialize;

use dctap_model::{NormalizedShape, NormalizedStatement, TapProfile, Warning};

#[derive(Debug, Serialize)]
pub(crate) struct ProfilePayload<'a> {
    pub shapes: Vec<ShapePayload<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<&'a [Warning]>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ShapePayload<'a> {
    #[serde(flatten)]
    pub shape: &'a NormalizedShape,
    /// Serialized as [`dctap_model::STATEMENT_TEMPLATES_KEY`].
    pub statement_templates: Vec<&'a NormalizedStatement>,
}

impl<'a> ProfilePayload<'a> {
    pub fn new(profile: &'a TapProfile, include_warnings: bool) -> Self {
        let shapes = profile
            .shapes
            .iter()
            .map(|shape| ShapePayload {
                shape,
                statement_templates: profile.statements_for(&shape.shape_id).collect(),
            })
            .collect();
        Self {
            shapes,
            warnings: include_warnings.then_some(profile.warnings.as_slice()),
        }
    }
}
