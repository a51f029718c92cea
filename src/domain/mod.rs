// SPDX-License-Identifier: MPL-2.0
//! Domain layer - records served by the backend and pure value objects.
//!
//! Nothing here performs I/O or knows about the UI toolkit. The only external
//! crates involved are `serde` (wire format) and `chrono` (timestamps).
//!
//! # Modules
//!
//! - [`event`]: Backend records ([`Event`](event::Event), [`Photo`](event::Photo))
//!   and their identifiers
//! - [`countdown`]: Remaining-time value object ([`Remaining`](countdown::Remaining))

pub mod countdown;
pub mod event;

pub use countdown::Remaining;
pub use event::{Event, EventId, Photo, PhotoId};
