use colored::Colorize;

use crate::features::motivation::Card;
use crate::features::notes::{NotesView, ENTRY_DELIMITER};
use crate::features::timer::{format_duration, Mode, TimerSettings, TimerState};

/// Format mode durations as a small table
pub fn format_modes_pretty(settings: &TimerSettings) -> String {
    let mut output = String::from("Timer modes\n");
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for mode in Mode::ALL {
        let minutes = i64::from(settings.minutes(mode));
        output.push_str(&format!(
            "{:<14} {}\n",
            mode.label().bold(),
            format_duration(chrono::Duration::minutes(minutes))
        ));
    }

    output.push_str(&format!(
        "\nA long break follows every {} focus intervals.",
        settings.long_break_every
    ));
    output
}

/// Format the motivation board
pub fn format_cards_pretty(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "Motivation (0 cards)\n  No cards".to_string();
    }

    let mut output = format!("Motivation ({} cards)\n", cards.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for card in cards {
        output.push_str(&format!(
            "{} {}\n",
            format!("{:>2}.", card.index).dimmed(),
            card.text
        ));
    }

    output
}

/// Format the notes pad
pub fn format_notes_pretty(view: &NotesView) -> String {
    match view {
        NotesView::Saved(text) => {
            let entries = view.entries();
            let mut output = format!("Notes ({} entries)\n", entries.len());
            output.push_str(&"─".repeat(60));
            output.push('\n');
            output.push_str(&text.replace(ENTRY_DELIMITER, &format!("\n{}\n", "───".dimmed())));
            output
        }
        NotesView::Empty => view.text().dimmed().to_string(),
        NotesView::Unavailable => view.text().red().to_string(),
    }
}

/// Format a single motivational message
pub fn format_message_pretty(message: &str) -> String {
    format!("✨ {}", message.italic())
}

/// Format the summary printed after a timer run
pub fn format_run_pretty(completed: &[(Mode, Mode)], state: &TimerState) -> String {
    let mut output = Vec::new();
    output.push(format!(
        "✅ {} interval{} complete",
        completed.len(),
        if completed.len() == 1 { "" } else { "s" }
    ));

    for (from, to) in completed {
        output.push(format!("   {from} → {to}"));
    }

    output.push(String::new());
    output.push(
        format!(
            "   Next up: {} ({} focus done this round)",
            state.mode, state.completed_focus_cycles
        )
        .dimmed()
        .to_string(),
    );
    output.join("\n")
}
