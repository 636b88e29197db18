//! Command implementations for dawn.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod notes;
mod timer;

pub use config::config;
pub use notes::notes;
pub use timer::{run_intervals, timer, Pacer, SystemPacer};

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::DawnError;
use crate::features::motivation::{render_cards, ThreadRngSource};
use crate::features::shell::{completion_install_instructions, generate_completions, shell_from_str};
use crate::output::{format_cards, format_message};

/// Execute cards command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn cards(config: &Config, format: OutputFormat) -> Result<String, DawnError> {
    let cards = render_cards(&config.motivation.card_messages());
    format_cards(&cards, format)
}

/// Execute message command
///
/// # Errors
///
/// Returns an error if the message list is empty or output formatting fails.
pub fn message(config: &Config, format: OutputFormat) -> Result<String, DawnError> {
    let mut picker = config.motivation.picker(Box::new(ThreadRngSource))?;
    format_message(picker.select(), format)
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the shell is unknown.
pub fn completions(shell: &str, install: bool) -> Result<String, DawnError> {
    let shell = shell_from_str(shell)
        .ok_or_else(|| DawnError::InvalidArgument(format!("Unknown shell: {shell}")))?;

    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::motivation::{CARD_MESSAGES, TIMER_MESSAGES};

    #[test]
    fn test_cards_default_board() {
        let output = cards(&Config::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], CARD_MESSAGES.len());
        assert_eq!(value["cards"][0]["text"], CARD_MESSAGES[0]);
    }

    #[test]
    fn test_message_from_default_list() {
        let output = message(&Config::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let text = value["message"].as_str().unwrap();
        assert!(TIMER_MESSAGES.contains(&text));
    }

    #[test]
    fn test_completions_unknown_shell() {
        assert!(matches!(
            completions("tcsh", false),
            Err(DawnError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_completions_install_instructions() {
        let output = completions("fish", true).unwrap();
        assert!(output.contains("dawn completions fish"));
    }
}
