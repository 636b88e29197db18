//! Event handling for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::DawnError;
use crate::features::navigation::Section;
use crate::features::notes::NotesStore;
use crate::features::timer::Mode;
use crate::tui::app::App;

/// How long to wait for input before redrawing.
///
/// Short enough for the countdown and scroll animation to stay smooth.
const FRAME: Duration = Duration::from_millis(50);

/// Action to take after handling an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Save the draft note.
    Save,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: NotesStore>(app: &mut App<S>) -> Result<Option<Action>, DawnError> {
    if event::poll(FRAME).map_err(|e| DawnError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| DawnError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Apply one key press to the app.
pub fn handle_key<S: NotesStore>(app: &mut App<S>, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.editing {
        return handle_edit_key(app, key);
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.cancel_pending();
            return Some(Action::Quit);
        }

        // Timer
        KeyCode::Char(' ') => {
            app.cancel_pending();
            app.toggle_timer(Instant::now());
        }
        KeyCode::Char('r') => {
            app.cancel_pending();
            app.reset_timer();
        }
        KeyCode::Char('f') => {
            app.cancel_pending();
            app.set_mode(Mode::Focus);
        }
        KeyCode::Char('s') => {
            app.cancel_pending();
            app.set_mode(Mode::ShortBreak);
        }
        KeyCode::Char('l') => {
            app.cancel_pending();
            app.set_mode(Mode::LongBreak);
        }

        // Sections
        KeyCode::Tab => {
            app.cancel_pending();
            app.next_section();
        }
        KeyCode::BackTab => {
            app.cancel_pending();
            app.previous_section();
        }
        KeyCode::Char(c @ '1'..='3') => {
            app.cancel_pending();
            let link = Section::ALL
                .iter()
                .zip('1'..='3')
                .find(|(_, key)| *key == c);
            if let Some((section, _)) = link {
                app.follow_anchor(section.anchor());
            }
        }

        // Scrolling - vim style
        KeyCode::Char('j') | KeyCode::Down => {
            app.cancel_pending();
            app.scroll_by(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cancel_pending();
            app.scroll_by(-1);
        }
        KeyCode::PageDown => {
            app.cancel_pending();
            app.scroll_by(10);
        }
        KeyCode::PageUp => {
            app.cancel_pending();
            app.scroll_by(-10);
        }

        // Jump to top/bottom
        KeyCode::Char('g') => {
            app.handle_g();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.cancel_pending();
            app.scroll_bottom();
        }
        KeyCode::Home => {
            app.cancel_pending();
            app.scroll_top();
        }

        // Notes
        KeyCode::Char('i') => {
            app.pending_g = false;
            app.begin_edit();
        }

        // Help
        KeyCode::Char('?') => {
            app.cancel_pending();
            app.status = Some(
                "space:start/pause | r:reset | f/s/l:focus/short/long | Tab/1-3:sections | \
                 j/k:scroll | gg/G:top/bottom | i:write | q:quit"
                    .to_string(),
            );
        }

        _ => {
            app.cancel_pending();
        }
    }

    None
}

fn handle_edit_key<S: NotesStore>(app: &mut App<S>, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => app.end_edit(),
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            app.draft.push('\n');
        }
        KeyCode::Enter => return Some(Action::Save),
        KeyCode::Backspace => {
            app.draft.pop();
        }
        KeyCode::Char(c) => app.draft.push(c),
        _ => {}
    }

    None
}
