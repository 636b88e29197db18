//! Storage layer for dawn.
//!
//! This module provides SQLite-based persistence for the notes pad.

mod database;
mod migrations;

pub use database::Database;
