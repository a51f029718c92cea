// SPDX-License-Identifier: MPL-2.0
//! `pixflow` is a desktop browser for time-limited photo events, built with
//! the Iced GUI framework.
//!
//! It lists the events served by a REST backend with a live countdown to
//! their expiry, filters them by title and opens a gallery of watermarked
//! photos that can be downloaded as served.

#![doc(html_root_url = "https://docs.rs/pixflow/0.1.0")]

pub mod app;
pub mod browser;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
