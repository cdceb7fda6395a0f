use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Local, TimeZone};

use crate::constants::CLOCK_REFRESH;

pub const LAUNCHER_LABEL: &str = " Arch Desktop";

/// "Mon Oct 19 14:32"
pub fn format_clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.format("%a %b %d %H:%M").to_string()
}

/// Clock label, recomputed at most once per refresh interval.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    label: String,
    next_refresh: Option<Instant>,
}

impl Clock {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn next_refresh(&self) -> Option<Instant> {
        self.next_refresh
    }

    /// Updates the label from the local wall clock when due.
    pub fn refresh_if_due(&mut self, now: Instant) -> bool {
        self.refresh_with(now, || format_clock(&Local::now()))
    }

    fn refresh_with(&mut self, now: Instant, read: impl FnOnce() -> String) -> bool {
        if self.next_refresh.is_some_and(|due| now < due) {
            return false;
        }
        self.label = read();
        self.next_refresh = Some(now + CLOCK_REFRESH);
        true
    }
}
