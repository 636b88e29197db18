//! JSON output formatting for dawn.

use serde::Serialize;
use serde_json::json;

use crate::error::DawnError;
use crate::features::motivation::Card;
use crate::features::notes::NotesView;
use crate::features::timer::{Mode, TimerSettings, TimerState};

/// Format mode durations as JSON
///
/// # Errors
///
/// Returns `DawnError::Json` if serialization fails.
pub fn format_modes_json(settings: &TimerSettings) -> Result<String, DawnError> {
    let modes: Vec<_> = Mode::ALL
        .iter()
        .map(|mode| {
            json!({
                "mode": mode,
                "label": mode.label(),
                "minutes": settings.minutes(*mode),
            })
        })
        .collect();

    let output = json!({
        "modes": modes,
        "long_break_every": settings.long_break_every,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the motivation board as JSON
///
/// # Errors
///
/// Returns `DawnError::Json` if serialization fails.
pub fn format_cards_json(cards: &[Card]) -> Result<String, DawnError> {
    let output = json!({
        "count": cards.len(),
        "cards": cards,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the notes pad as JSON
///
/// # Errors
///
/// Returns `DawnError::Json` if serialization fails.
pub fn format_notes_json(view: &NotesView, updated_at: Option<&str>) -> Result<String, DawnError> {
    let entries = view.entries();
    let output = json!({
        "notes": view,
        "count": entries.len(),
        "entries": entries,
        "updated_at": updated_at,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a finished timer run as JSON
///
/// # Errors
///
/// Returns `DawnError::Json` if serialization fails.
pub fn format_run_json(completed: &[(Mode, Mode)], state: &TimerState) -> Result<String, DawnError> {
    let transitions: Vec<_> = completed
        .iter()
        .map(|(from, to)| json!({ "from": from, "to": to }))
        .collect();

    let output = json!({
        "completed": transitions,
        "state": state,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `DawnError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, DawnError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::motivation::render_cards;

    #[test]
    fn test_format_modes_json() {
        let result = format_modes_json(&TimerSettings::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["long_break_every"], 4);
        assert_eq!(value["modes"][0]["mode"], "focus");
        assert_eq!(value["modes"][0]["minutes"], 25);
        assert_eq!(value["modes"][1]["mode"], "short-break");
        assert_eq!(value["modes"][2]["label"], "Long break");
    }

    #[test]
    fn test_format_cards_json_keeps_order() {
        let cards = render_cards(&["a".to_string(), "b".to_string()]);
        let value: serde_json::Value =
            serde_json::from_str(&format_cards_json(&cards).unwrap()).unwrap();

        assert_eq!(value["count"], 2);
        assert_eq!(value["cards"][0]["text"], "a");
        assert_eq!(value["cards"][1]["index"], 2);
    }

    #[test]
    fn test_format_notes_json_saved() {
        let view = NotesView::Saved("one\n\n---\n\ntwo".to_string());
        let value: serde_json::Value =
            serde_json::from_str(&format_notes_json(&view, Some("2024-01-01T00:00:00Z")).unwrap())
                .unwrap();

        assert_eq!(value["notes"]["state"], "saved");
        assert_eq!(value["count"], 2);
        assert_eq!(value["entries"][1], "two");
    }

    #[test]
    fn test_format_notes_json_empty() {
        let value: serde_json::Value =
            serde_json::from_str(&format_notes_json(&NotesView::Empty, None).unwrap()).unwrap();

        assert_eq!(value["notes"]["state"], "empty");
        assert_eq!(value["count"], 0);
        assert!(value["updated_at"].is_null());
    }

    #[test]
    fn test_format_run_json() {
        let state = TimerState {
            mode: Mode::ShortBreak,
            seconds_remaining: 300,
            is_running: false,
            completed_focus_cycles: 1,
        };
        let result = format_run_json(&[(Mode::Focus, Mode::ShortBreak)], &state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(value["completed"][0]["from"], "focus");
        assert_eq!(value["state"]["seconds_remaining"], 300);
        assert_eq!(value["state"]["completed_focus_cycles"], 1);
    }
}
