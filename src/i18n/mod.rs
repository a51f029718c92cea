// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses Fluent. Translation files are embedded in the binary
//! from `assets/i18n/`, one `<locale>.ftl` per language.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Message arguments (`{ $name }`)
//! - Locale-specific date formatting through the `date-format` message
//! - Fallback to `en-US` when a message is missing in the active locale

pub mod fluent;
