//! Feature implementations for dawn.
//!
//! This module contains:
//! - The Focus/Break interval timer
//! - Motivational messages and cards
//! - The persisted notes pad
//! - In-page navigation
//! - Shell integration

pub mod motivation;
pub mod navigation;
pub mod notes;
pub mod shell;
pub mod timer;
