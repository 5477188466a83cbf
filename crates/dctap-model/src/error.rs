use thiserror::Error;

/// The table itself is malformed; the parse cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("row {row} has {found} cells but the header row has {expected} columns")]
    RowTooWide {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error(
        "columns {first} and {second} both map to DCTAP element {element} \
         (headers \"{first_header}\" and \"{second_header}\")"
    )]
    DuplicateElement {
        element: &'static str,
        first: usize,
        second: usize,
        first_header: String,
        second_header: String,
    },

    #[error("columns {first} and {second} share the header \"{name}\"")]
    DuplicateColumn {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("valid DCTAP tables must have a propertyID column")]
    MissingPropertyColumn,
}

/// The caller supplied contradictory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("expected extra \"{name}\" is a DCTAP element name")]
    ExtraIsElement { name: String },

    #[error("\"{name}\" is listed as both a shape extra and a statement extra")]
    ExtraInBothScopes { name: String },

    #[error("shape extra \"{name}\" collides with the reserved output key \"{reserved}\"")]
    ReservedShapeExtra { name: String, reserved: &'static str },

    #[error("alias \"{alias}\" targets unknown DCTAP element \"{target}\"")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("default shape name must not be empty")]
    EmptyDefaultShape,

    #[error("picklist item separator must not be empty")]
    EmptyPicklistSeparator,
}

/// Fatal parse failure. Everything else is reported as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DctapError {
    #[error("malformed table: {0}")]
    Structural(#[from] StructuralError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, DctapError>;
