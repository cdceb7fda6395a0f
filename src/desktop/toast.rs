use std::time::Instant;

use crate::constants::TOAST_DURATION;

/// A single transient notice. A newer message replaces the current one and
/// gets the full display time.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    current: Option<(String, Instant)>,
}

impl Toast {
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!(%message, "toast");
        self.current = Some((message, now + TOAST_DURATION));
    }

    /// The message on screen at `now`, if any.
    pub fn message(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|(_, until)| now < *until)
            .map(|(message, _)| message.as_str())
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.current.as_ref().map(|(_, until)| *until)
    }

    /// Drops the message once its time is up.
    pub fn expire(&mut self, now: Instant) {
        if self.expires_at().is_some_and(|until| now >= until) {
            self.current = None;
        }
    }
}
