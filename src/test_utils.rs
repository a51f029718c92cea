// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for unit tests.
//!
//! Times are expressed relative to [`reference_now`] so expectations do not
//! depend on the wall clock.

use crate::domain::{Event, EventId, Photo, PhotoId};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed "current time" used by fixtures.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Builds an event expiring `expires_in_secs` after [`reference_now`]
/// (negative values are already expired).
pub fn event(id: &str, title: &str, expires_in_secs: i64) -> Event {
    Event {
        id: EventId::new(id),
        title: title.to_string(),
        date: reference_now() - Duration::days(1),
        expires_at: reference_now() + Duration::seconds(expires_in_secs),
        cover_url: format!("https://cdn.example.com/covers/{id}.jpg"),
    }
}

pub fn photo(id: &str, url: &str) -> Photo {
    Photo {
        id: PhotoId::new(id),
        watermarked_url: url.to_string(),
    }
}
