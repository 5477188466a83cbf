//! CLI library components for the DCTAP reader.

pub mod logging;
pub mod pipeline;
