//! # Ticker
//!
//! A one-shot, re-armed tick source for the countdown.
//!
//! The event loop asks how long it may block (`time_until_due`), then calls
//! `poll`. A due tick disarms the ticker; the loop re-arms it only after the
//! tick handler has run, so a slow handler delays the next tick instead of
//! stacking ticks up.
//!
//! Elapsed time is measured from an anchor that advances by whole seconds,
//! so late wake-ups never lose or double-count a second.

use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    anchor: Instant,
    deadline: Option<Instant>,
}

impl Ticker {
    /// Start ticking from `now`; the first tick is due one interval later.
    pub fn start(now: Instant) -> Self {
        Self {
            anchor: now,
            deadline: Some(now + TICK_INTERVAL),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// How long until the next tick is due. `None` when disarmed.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// If a tick is due, disarm and return the elapsed whole seconds.
    pub fn poll(&mut self, now: Instant) -> Option<u64> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.anchor).as_secs();
        self.anchor += Duration::from_secs(elapsed);
        self.deadline = None;
        Some(elapsed)
    }

    /// Schedule the next tick one interval after `now`.
    pub fn rearm(&mut self, now: Instant) {
        self.deadline = Some(now + TICK_INTERVAL);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_not_due_before_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(t0);
        assert_eq!(ticker.time_until_due(t0 + ms(400)), Some(ms(600)));
        assert_eq!(ticker.poll(t0 + ms(999)), None);
        assert!(ticker.is_armed());
    }

    #[test]
    fn test_due_tick_disarms_until_rearmed() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(t0);
        assert_eq!(ticker.poll(t0 + ms(1000)), Some(1));
        assert!(!ticker.is_armed());
        assert_eq!(ticker.poll(t0 + ms(5000)), None);
        assert_eq!(ticker.time_until_due(t0 + ms(5000)), None);

        ticker.rearm(t0 + ms(1000));
        assert_eq!(ticker.poll(t0 + ms(2000)), Some(1));
    }

    #[test]
    fn test_late_wakeups_do_not_drift() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(t0);
        let mut total = 0;
        let mut now = t0;
        // Each wake-up is 300ms late; the fraction accumulates in the anchor
        for _ in 0..10 {
            now += ms(1300);
            if let Some(elapsed) = ticker.poll(now) {
                total += elapsed;
            }
            ticker.rearm(now);
        }
        assert_eq!(total, now.duration_since(t0).as_secs());
    }

    #[test]
    fn test_stop() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(t0);
        ticker.stop();
        assert_eq!(ticker.poll(t0 + ms(2000)), None);
    }
}
