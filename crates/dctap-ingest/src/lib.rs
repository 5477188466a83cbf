//! Table ingestion for DCTAP profiles.

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{IngestOptions, RawTable, delimiter_for_path, read_table, read_table_from_reader};
