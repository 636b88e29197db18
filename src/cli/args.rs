use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::features::timer::Mode;

#[derive(Parser)]
#[command(name = "dawn")]
#[command(about = "A terminal study companion: notes, focus timer, and motivation")]
#[command(long_about = "dawn - a terminal study companion

A notes pad you can leave for each other, a Focus/Break interval timer
with a long break every fourth focus, and a board of motivational cards.

QUICK START:
  dawn                       Open the full-screen page
  dawn timer run             Run one 25-minute focus interval
  dawn notes add \"You got this\"   Leave a note
  dawn cards                 Show the motivation board

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  dawn <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output. Defaults to `general.default_output` from
    /// the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Command to run. Opens the page when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the full-screen page
    ///
    /// Notes, timer and motivation board on one scrollable page.
    ///
    /// # Keybindings
    ///
    ///   Space          Start / pause the timer
    ///   r              Reset the current interval
    ///   f / s / l      Switch to Focus / Short break / Long break
    ///   Tab, S-Tab     Jump to next / previous section
    ///   j/k, gg/G      Scroll, jump to top / bottom
    ///   i              Write a note (Enter saves, Esc cancels)
    ///   q/Esc          Quit
    Tui,

    /// Focus/Break interval timer
    ///
    /// # Subcommands
    ///
    ///   run     Count down intervals in the terminal
    ///   modes   Show mode durations
    ///
    /// # Examples
    ///
    ///   dawn timer run                   One focus interval
    ///   dawn timer run -n 8              Focus and breaks, back to back
    ///   dawn timer run --mode short      Just a short break
    ///   dawn timer run --focus 50m       Longer focus intervals
    Timer(TimerArgs),

    /// Notes pad
    ///
    /// # Examples
    ///
    ///   dawn notes show
    ///   dawn notes add "Proud of you. Chai at 5?"
    Notes(NotesArgs),

    /// Show the motivation board
    Cards,

    /// Print one random motivational message
    Message,

    /// View or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Outputs completion script for the specified shell.
    ///
    /// Example: dawn completions bash > ~/.bash_completion.d/dawn
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for the timer command.
#[derive(Args)]
pub struct TimerArgs {
    #[command(subcommand)]
    pub command: TimerCommands,
}

/// Timer subcommands.
#[derive(Subcommand)]
pub enum TimerCommands {
    /// Count down intervals in the terminal
    ///
    /// Starts immediately and starts each following interval as soon as
    /// the previous one completes.
    Run {
        /// Mode to start in
        #[arg(long, short = 'm', value_enum, default_value = "focus")]
        mode: Mode,

        /// Number of intervals to complete before exiting
        #[arg(long, short = 'n', default_value = "1")]
        intervals: u32,

        /// Focus length (e.g., 25, 25m, 1h)
        #[arg(long)]
        focus: Option<String>,

        /// Short break length
        #[arg(long)]
        short: Option<String>,

        /// Long break length
        #[arg(long)]
        long: Option<String>,
    },

    /// Show mode durations and the long-break policy
    Modes,
}

/// Arguments for the notes command.
#[derive(Args)]
pub struct NotesArgs {
    #[command(subcommand)]
    pub command: NotesCommands,
}

/// Notes subcommands.
#[derive(Subcommand)]
pub enum NotesCommands {
    /// Show saved notes
    Show,

    /// Append a note
    ///
    /// Words are joined with spaces. Blank notes are ignored.
    Add {
        /// Note text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
