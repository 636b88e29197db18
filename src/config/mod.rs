//! Configuration management for dawn.
//!
//! This module handles loading and saving configuration from `~/.dawn/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{ColorSetting, Config, GeneralConfig, MotivationConfig, TimerConfig};
