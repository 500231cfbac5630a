//! Command implementations

pub mod profile;
pub mod rules_engine;
