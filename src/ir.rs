//! Intermediate representations built from translation files.

pub mod flat_map;
pub mod overrides;
