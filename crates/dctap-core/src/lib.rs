//! DCTAP profile reading: header classification, row normalization and
//! profile assembly.
//!
//! # Architecture
//!
//! ```text
//! headers ──► HeaderClassifier ──► Vec<Header>
//!                                     │
//! rows ─────► RowNormalizer ◄─────────┘ ──► shapes + statements
//!                                              │
//!                        check_bounds ◄────────┘ ──► TapProfile
//! ```
//!
//! Each call to [`parse`] owns its classifier, normalizer and warning
//! collector. Only the element registry is shared.

pub mod config;
pub mod header;
pub mod normalize;
mod parse;

pub use config::{
    CONFIG_FILE_NAME, ConfigLoadError, default_config_toml, load_config, validate_config,
};
pub use header::{HEADER_ROW, HeaderClassifier, clean_header};
pub use normalize::{RowNormalizer, RowOutcome};
pub use parse::{FIRST_DATA_ROW, parse};
