// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

/// This enum represents the status of the [`InactivityTimer`]:
/// - [`InactivityStatus::NotStarted`]: No activity has been recorded yet (or the timer
///   was reset).
/// - [`InactivityStatus::Expired`]: Activity was recorded, but the time since then
///   exceeds the timeout.
/// - [`InactivityStatus::Active`]: Activity was recorded, and the time since then is
///   within the timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InactivityStatus {
    NotStarted,
    Expired,
    Active,
}

/// Tracks the time of the last user activity and tells you whether a burst of activity
/// (for example a sequence of type-ahead keystrokes) has gone quiet for longer than
/// `timeout`. The caller always supplies `now`, which keeps this deterministic in tests.
///
/// 1. Call [`Self::record_activity`] with the current time on every keystroke.
/// 2. Before extending the burst, call [`Self::get_status`]. If it is
///    [`InactivityStatus::Expired`], start over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InactivityTimer {
    pub maybe_last_activity: Option<Instant>,
    pub timeout: Duration,
}

impl InactivityTimer {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            maybe_last_activity: None,
            timeout,
        }
    }

    #[must_use]
    pub fn get_status(&self, now: Instant) -> InactivityStatus {
        match self.maybe_last_activity {
            None => InactivityStatus::NotStarted,
            Some(last_activity) => {
                if now.saturating_duration_since(last_activity) > self.timeout {
                    InactivityStatus::Expired
                } else {
                    InactivityStatus::Active
                }
            }
        }
    }

    pub fn record_activity(&mut self, now: Instant) { self.maybe_last_activity.replace(now); }

    pub fn reset(&mut self) { self.maybe_last_activity = None; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_not_started() {
        let timer = InactivityTimer::new(Duration::from_millis(1000));
        assert_eq2!(timer.get_status(Instant::now()), InactivityStatus::NotStarted);
    }

    #[test]
    fn test_active_within_timeout() {
        let mut timer = InactivityTimer::new(Duration::from_millis(1000));
        let now = Instant::now();
        timer.record_activity(now);
        assert_eq2!(
            timer.get_status(now + Duration::from_millis(999)),
            InactivityStatus::Active
        );
        assert_eq2!(
            timer.get_status(now + Duration::from_millis(1000)),
            InactivityStatus::Active
        );
    }

    #[test]
    fn test_expired_after_timeout() {
        let mut timer = InactivityTimer::new(Duration::from_millis(1000));
        let now = Instant::now();
        timer.record_activity(now);
        assert_eq2!(
            timer.get_status(now + Duration::from_millis(1001)),
            InactivityStatus::Expired
        );
    }

    #[test]
    fn test_reset() {
        let mut timer = InactivityTimer::new(Duration::from_millis(10));
        let now = Instant::now();
        timer.record_activity(now);
        timer.reset();
        assert_eq2!(timer.get_status(now), InactivityStatus::NotStarted);
    }

    #[test]
    fn test_clock_going_backwards_is_active() {
        let mut timer = InactivityTimer::new(Duration::from_millis(10));
        let now = Instant::now() + Duration::from_secs(1);
        timer.record_activity(now);
        assert_eq2!(
            timer.get_status(now - Duration::from_millis(500)),
            InactivityStatus::Active
        );
    }
}
