//! CLI library components for the bicycle inventory transformer.

pub mod commands;
pub mod logging;
pub mod options;
