//! Random message selection.
//!
//! Each selection draws one index uniformly at random, with replacement, so
//! the same message may come up twice in a row. The randomness lives behind
//! [`IndexSource`] so tests can script the draws.

use rand::Rng;

use super::messages::{to_owned_list, TIMER_MESSAGES};
use crate::error::DawnError;

/// Supplies indices for message selection.
pub trait IndexSource {
    /// Draw an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Picks messages from a fixed, non-empty list.
pub struct MessagePicker {
    messages: Vec<String>,
    source: Box<dyn IndexSource>,
}

impl std::fmt::Debug for MessagePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessagePicker")
            .field("messages", &self.messages.len())
            .finish_non_exhaustive()
    }
}

impl MessagePicker {
    /// Create a picker over `messages`.
    ///
    /// # Errors
    ///
    /// Returns `DawnError::Config` if the list is empty or holds only blank
    /// strings.
    pub fn new(messages: Vec<String>, source: Box<dyn IndexSource>) -> Result<Self, DawnError> {
        let messages: Vec<String> = messages
            .into_iter()
            .filter(|m| !m.trim().is_empty())
            .collect();

        if messages.is_empty() {
            return Err(DawnError::Config(
                "Motivation message list must not be empty".to_string(),
            ));
        }

        Ok(Self { messages, source })
    }

    /// Picker over the built-in timer messages using the thread RNG.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            messages: to_owned_list(TIMER_MESSAGES),
            source: Box::new(ThreadRngSource),
        }
    }

    /// Select the next message.
    pub fn select(&mut self) -> &str {
        let len = self.messages.len();
        let index = self.source.pick(len) % len;
        &self.messages[index]
    }

    /// Candidate messages, in order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
