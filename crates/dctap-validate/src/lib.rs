//! Validation of DCTAP value constraints and statement elements.
//!
//! Nothing in this crate fails: problems become [`Issue`]s, which the caller
//! turns into located warnings.

mod bounds;
pub mod checks;
mod issue;
pub mod statement;

pub use bounds::check_bounds;
pub use checks::{
    ConstraintDeclaration, ConstraintOutcome, ConstraintValidator, is_language_tag,
    parse_number, split_items,
};
pub use issue::Issue;
pub use statement::{check_node_type_consistency, normalize_node_type, parse_flag};
