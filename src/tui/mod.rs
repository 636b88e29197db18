//! Terminal User Interface (TUI) for dawn.
//!
//! One scrollable page with the notes pad, the study timer and the
//! motivation board. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::{Config, Paths};
use crate::error::DawnError;
use crate::features::notes::{NotesPad, NotesStore, SqliteNotesStore};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run. Notes that
/// cannot be opened show as unavailable.
pub fn run(paths: &Paths, config: &Config) -> Result<(), DawnError> {
    let store = SqliteNotesStore::open(paths);
    let mut app = App::new(NotesPad::new(store), config)?;

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| DawnError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| DawnError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| DawnError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend, S: NotesStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), DawnError> {
    loop {
        app.on_frame(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| DawnError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => app.should_quit = true,
                event::Action::Save => app.save_draft(),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
