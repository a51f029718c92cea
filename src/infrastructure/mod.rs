// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Everything that talks to the outside world lives here:
//!
//! - [`http`]: REST client for the events backend ([`ApiClient`])
//! - [`download`]: Streaming photo downloads to user-chosen files
//!
//! # Design Notes
//!
//! - Adapters return domain types and the crate [`Error`](crate::error::Error)
//! - Futures are driven by Iced `Task`s; nothing here spawns on its own

pub mod download;
pub mod http;

pub use http::ApiClient;
