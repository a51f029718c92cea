// SPDX-License-Identifier: MPL-2.0
//! Shared wall clock driving every countdown on screen.
//!
//! A single clock value is advanced by one periodic tick; each card derives
//! its text from it with [`CountdownClock::remaining`]. The tick itself is an
//! Iced subscription that only exists while countdowns are displayed (see
//! `app::subscription`), so no timer outlives the cards it serves.

use crate::domain::Remaining;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Interval between countdown refreshes.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownClock {
    now: DateTime<Utc>,
}

impl CountdownClock {
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Advances the clock. Wall-clock adjustments may move it backwards;
    /// the countdown simply follows.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    #[must_use]
    pub fn remaining(&self, expires_at: DateTime<Utc>) -> Remaining {
        Remaining::until(expires_at, self.now)
    }

    /// Countdown text, e.g. `"2d 4h 10m 5s"`.
    #[must_use]
    pub fn display(&self, expires_at: DateTime<Utc>) -> String {
        self.remaining(expires_at).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::reference_now;
    use chrono::Duration as ChronoDuration;

    #[test]
    fn tick_moves_the_countdown() {
        let expires_at = reference_now() + ChronoDuration::seconds(10);
        let mut clock = CountdownClock::new(reference_now());
        assert_eq!(clock.display(expires_at), "0d 0h 0m 10s");

        clock.tick(reference_now() + ChronoDuration::seconds(1));
        assert_eq!(clock.display(expires_at), "0d 0h 0m 9s");

        clock.tick(reference_now() + ChronoDuration::seconds(30));
        assert_eq!(clock.display(expires_at), "0d 0h 0m 0s");
    }

    #[test]
    fn tick_interval_is_one_second() {
        assert_eq!(TICK_INTERVAL, Duration::from_secs(1));
    }
}
