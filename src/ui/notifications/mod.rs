// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for download results and load problems.
//!
//! Notifications carry an i18n key plus interpolation arguments and are
//! resolved at render time, so a locale switch re-renders them correctly.
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-download-success").with_arg("file", "p1.jpg"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success and info toasts stay 3s, warnings 5s, errors until dismissed.
//! At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
