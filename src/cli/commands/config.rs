//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::DawnError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or serialized.
pub fn config(
    cmd: ConfigCommands,
    paths: &Paths,
    current: &Config,
    format: OutputFormat,
) -> Result<String, DawnError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(current),
            OutputFormat::Pretty => serde_yaml::to_string(current)
                .map_err(|e| DawnError::Config(format!("Failed to serialize config: {e}"))),
        },
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init(paths, force),
    }
}

fn init(paths: &Paths, force: bool) -> Result<String, DawnError> {
    if paths.config_file.exists() && !force {
        return Err(DawnError::Config(format!(
            "{} already exists. Use --force to overwrite.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    log::info!("wrote default config to {}", paths.config_file.display());

    Ok(format!(
        "{} Wrote {}",
        "✓".green(),
        paths.config_file.display()
    ))
}
