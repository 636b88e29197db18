//! Command-line interface for dawn.

pub mod args;
pub mod commands;
