// SPDX-License-Identifier: MPL-2.0
//! Subscriptions: native events and the two periodic ticks.
//!
//! Both ticks exist only while something needs them, so an idle window
//! with no cards and no toasts schedules no timers.

use super::Message;
use crate::browser::clock::TICK_INTERVAL;
use crate::config::HOUSEKEEPING_TICK_MS;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Escape closes the gallery; resizes drive the grid column count.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Single shared one-second ticker for every displayed countdown.
pub fn create_clock_subscription(has_countdowns: bool) -> Subscription<Message> {
    if has_countdowns {
        time::every(TICK_INTERVAL).map(Message::ClockTick)
    } else {
        Subscription::none()
    }
}

/// Spinner animation and toast auto-dismiss.
pub fn create_tick_subscription(is_busy: bool, has_notifications: bool) -> Subscription<Message> {
    if is_busy || has_notifications {
        time::every(Duration::from_millis(HOUSEKEEPING_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
