// SPDX-License-Identifier: MPL-2.0
//! Remaining time until an expiry instant.
//!
//! [`Remaining`] is a pure function of `(expires_at, now)`: the difference is
//! clamped at zero and split with floor division into days, hours, minutes
//! and seconds. Sub-second remainders are dropped.

use chrono::{DateTime, Utc};
use std::fmt;

const MS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Whole days, hours, minutes and seconds left before expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Zero duration, shown for anything at or past its expiry.
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Computes the time left from `now` until `expires_at`.
    #[must_use]
    pub fn until(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff_ms = (expires_at - now).num_milliseconds();
        Self::from_millis(diff_ms)
    }

    /// Splits a millisecond count, flooring negative values at zero.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        if millis <= 0 {
            return Self::ZERO;
        }
        let total_seconds = millis / MS_PER_SECOND;
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
        }
    }

    /// Total milliseconds represented by the whole components.
    #[must_use]
    pub fn total_millis(&self) -> i64 {
        (((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds) * MS_PER_SECOND
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
