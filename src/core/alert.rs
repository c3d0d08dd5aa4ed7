//! Single-slot mailbox for urgent conditions.
//!
//! Any block may post a message during its turn; the refresh loop presents it
//! as a flash sequence and then clears it. There is no queue: a later post in
//! the same cycle replaces an earlier one.

use super::config::ALERT_CAPACITY;

/// Holds at most one pending alert message.
#[derive(Debug, Clone)]
pub struct AlertChannel {
    capacity: usize,
    pending: Option<String>,
}

impl AlertChannel {
    pub fn new() -> Self {
        Self::with_capacity(ALERT_CAPACITY)
    }

    /// Create a channel whose messages are cut to `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            pending: None,
        }
    }

    /// Replace any pending message. Overlong text is truncated on a char boundary.
    pub fn set(&mut self, message: impl Into<String>) {
        let mut message = message.into();
        truncate_on_boundary(&mut message, self.capacity);
        log::info!("alert raised: {}", message);
        self.pending = Some(message);
    }

    /// Look at the pending message without clearing it
    pub fn peek(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Remove and return the pending message, leaving the slot empty
    pub fn take_and_clear(&mut self) -> Option<String> {
        self.pending.take()
    }
}

impl Default for AlertChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Cut `text` to at most `max` bytes without splitting a UTF-8 sequence
pub(crate) fn truncate_on_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
