//! Motivation board cards.

use serde::Serialize;

/// One card on the motivation board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Position on the board, starting at 1.
    pub index: usize,
    /// Card text.
    pub text: String,
}

/// Materialize one card per message, preserving order.
#[must_use]
pub fn render_cards(messages: &[String]) -> Vec<Card> {
    messages
        .iter()
        .enumerate()
        .map(|(i, text)| Card {
            index: i + 1,
            text: text.clone(),
        })
        .collect()
}
