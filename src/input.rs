//! Translation sources: locale file lookup, YAML flattening and the base dictionary.

pub mod base_keys;
pub mod error;
pub mod resolver;
pub mod translation;
