// SPDX-License-Identifier: MPL-2.0
//! User interface: design tokens, styles, reusable widgets and the views of
//! the listing and gallery.

pub mod design_tokens;
pub mod event_card;
pub mod event_list;
pub mod gallery_modal;
pub mod hero;
pub mod notifications;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod thumbnails;
pub mod widgets;
