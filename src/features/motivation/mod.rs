//! Motivational messages and the motivation board.
//!
//! - Random message rotation for the timer
//! - The fixed card list shown on the board

pub mod cards;
pub mod messages;
pub mod picker;

pub use cards::{render_cards, Card};
pub use messages::{CARD_MESSAGES, TIMER_MESSAGES};
pub use picker::{IndexSource, MessagePicker, ThreadRngSource};
