//! dawn - a terminal study companion
//!
//! This crate provides a notes pad, a Focus/Break interval timer with cycle
//! counting, rotating motivational messages and a motivation card board,
//! reachable from a command-line interface or a full-screen terminal page.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::DawnError;
pub use features::timer::{IntervalTimer, Mode, TimerObserver};
