//! # Countdown
//!
//! Remaining time for a running sprint, held as minutes and seconds.
//!
//! `tick` is pure: it takes the elapsed whole seconds and returns the new
//! value. The remaining time never goes below `00:00`; once there, further
//! ticks return the same value.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    minutes: u32,
    /// Always in `0..=59`.
    seconds: u32,
}

impl Countdown {
    /// A countdown starting at `minutes:00`.
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes, seconds: 0 }
    }

    /// Build from a raw minute/second pair. Seconds above 59 carry into minutes.
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self::from_total_seconds(u64::from(minutes) * 60 + u64::from(seconds))
    }

    fn from_total_seconds(total: u64) -> Self {
        let minutes = u32::try_from(total / 60).unwrap_or(u32::MAX);
        Self {
            minutes,
            seconds: (total % 60) as u32,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    pub fn is_finished(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Advance the countdown by `elapsed` whole seconds, clamping at zero.
    ///
    /// Borrowing from minutes leaves the seconds at 59 for a one-second tick,
    /// e.g. `02:00 → 01:59`.
    #[must_use]
    pub fn tick(self, elapsed: u64) -> Self {
        Self::from_total_seconds(self.total_seconds().saturating_sub(elapsed))
    }

    /// Zero-padded `MM:SS`. Minutes past 99 render in full.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}
