use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use dawn::cli::args::{Cli, Commands};
use dawn::cli::commands;
use dawn::config::{Config, Paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dawn::logging::init();

    let cli = Cli::parse();
    let paths = Paths::new().context("Failed to resolve the dawn directory")?;
    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("Failed to load {}", paths.config_file.display()))?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            dawn::tui::run(&paths, &config)?;
            String::new()
        }
        Commands::Timer(args) => commands::timer(args.command, &config, format)?,
        Commands::Notes(args) => commands::notes(args.command, &paths, format)?,
        Commands::Cards => commands::cards(&config, format)?,
        Commands::Message => commands::message(&config, format)?,
        Commands::Config(args) => commands::config(args.command, &paths, &config, format)?,
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
