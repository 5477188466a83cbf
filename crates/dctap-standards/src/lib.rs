#![deny(unsafe_code)]

pub mod registry;

pub use crate::registry::{ElementRegistry, NODE_TYPES, normalize_name, registry};
