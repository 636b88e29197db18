//! Configuration settings for dawn.
//!
//! Settings are loaded from `~/.dawn/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::DawnError;
use crate::features::motivation::{
    messages::to_owned_list, IndexSource, MessagePicker, CARD_MESSAGES, TIMER_MESSAGES,
};
use crate::features::timer::TimerSettings;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Interval timer settings.
    pub timer: TimerConfig,
    /// Motivation message settings.
    pub motivation: MotivationConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to `colored` output.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Interval timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus interval length in minutes.
    #[serde(default = "default_focus")]
    pub focus_minutes: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of focus intervals before a long break.
    #[serde(default = "default_long_break_every")]
    pub long_break_every: u32,
}

/// Motivation message settings.
///
/// `None` keeps the built-in lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MotivationConfig {
    /// Messages rotated on the timer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
    /// Cards shown on the motivation board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<String>>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_long_break_every() -> u32 {
    4
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            long_break_every: default_long_break_every(),
        }
    }
}

impl TimerConfig {
    /// Validated timer settings.
    ///
    /// # Errors
    ///
    /// Returns `DawnError::Config` if any duration or the long break
    /// threshold is zero.
    pub fn settings(&self) -> Result<TimerSettings, DawnError> {
        let fields = [
            ("timer.focus_minutes", self.focus_minutes),
            ("timer.short_break_minutes", self.short_break_minutes),
            ("timer.long_break_minutes", self.long_break_minutes),
            ("timer.long_break_every", self.long_break_every),
        ];

        if let Some((name, _)) = fields.iter().find(|(_, value)| *value == 0) {
            return Err(DawnError::Config(format!("{name} must be at least 1")));
        }

        Ok(TimerSettings {
            focus_minutes: self.focus_minutes,
            short_break_minutes: self.short_break_minutes,
            long_break_minutes: self.long_break_minutes,
            long_break_every: self.long_break_every,
        })
    }
}

impl MotivationConfig {
    /// Timer messages, configured or built in.
    #[must_use]
    pub fn timer_messages(&self) -> Vec<String> {
        self.messages
            .clone()
            .unwrap_or_else(|| to_owned_list(TIMER_MESSAGES))
    }

    /// Board cards, configured or built in.
    #[must_use]
    pub fn card_messages(&self) -> Vec<String> {
        self.cards
            .clone()
            .unwrap_or_else(|| to_owned_list(CARD_MESSAGES))
    }

    /// Message picker over the timer messages.
    ///
    /// # Errors
    ///
    /// Returns `DawnError::Config` if the configured list is empty.
    pub fn picker(&self, source: Box<dyn IndexSource>) -> Result<MessagePicker, DawnError> {
        MessagePicker::new(self.timer_messages(), source)
            .map_err(|_| DawnError::Config("motivation.messages must not be empty".to_string()))
    }

    fn validate(&self) -> Result<(), DawnError> {
        let blank = |list: &Option<Vec<String>>| {
            list.as_ref()
                .is_some_and(|l| l.iter().all(|m| m.trim().is_empty()))
        };

        if blank(&self.messages) {
            return Err(DawnError::Config(
                "motivation.messages must not be empty".to_string(),
            ));
        }
        if blank(&self.cards) {
            return Err(DawnError::Config(
                "motivation.cards must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, DawnError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds invalid values.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, DawnError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            DawnError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            DawnError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `DawnError::Config` naming the first invalid setting.
    pub fn validate(&self) -> Result<(), DawnError> {
        self.timer.settings()?;
        self.motivation.validate()
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), DawnError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| DawnError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            DawnError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
