// SPDX-License-Identifier: MPL-2.0
//! Application root: owns all state and wires the browsing model to the
//! views, the backend client and the notification toasts.
//!
//! State flows down into views as shared references; views emit messages
//! and only `App::update` mutates anything.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::browser::Browser;
use crate::config::{self, DEFAULT_IMAGE_CACHE_CAPACITY, ENV_BACKEND_URL};
use crate::i18n::fluent::I18n;
use crate::infrastructure::ApiClient;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::thumbnails::Thumbnails;
use chrono::Utc;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::AppState;
use std::fmt;
use std::num::NonZeroUsize;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

pub struct App {
    i18n: I18n,
    /// `None` when the configured backend URL is unusable.
    api: Option<ApiClient>,
    browser: Browser,
    search_input: String,
    thumbnails: Thumbnails,
    theme_mode: ThemeMode,
    app_state: AppState,
    notifications: notifications::Manager,
    /// Angle of the loading spinners, advanced by the housekeeping tick.
    spinner_rotation: f32,
    viewport_width: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.browser.phase())
            .field("events", &self.browser.store().events().len())
            .field("query", &self.browser.store().query())
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            api: None,
            browser: Browser::new(Utc::now()),
            search_input: String::new(),
            thumbnails: Thumbnails::new(image_cache_capacity()),
            theme_mode: ThemeMode::System,
            app_state: AppState::default(),
            notifications: notifications::Manager::new(),
            spinner_rotation: 0.0,
            viewport_width: WINDOW_DEFAULT_WIDTH,
        }
    }
}

fn image_cache_capacity() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_IMAGE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN)
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls `boot` through `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and persisted state, then starts the event request.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = AppState::load();

        let mut app = App {
            i18n: I18n::new(flags.lang.clone(), &config),
            theme_mode: config.general.theme_mode,
            app_state,
            ..Self::default()
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        let env_url = std::env::var(ENV_BACKEND_URL).ok();
        let base_url =
            config::resolve_backend_url(flags.backend_url.as_deref(), env_url.as_deref(), &config);

        let task = match ApiClient::new(&base_url, config.backend.request_timeout()) {
            Ok(api) => {
                tracing::info!(base_url = %api.base_url(), "using backend");
                let task = update::fetch_events(api.clone());
                app.api = Some(api);
                task
            }
            Err(err) => {
                tracing::error!(%base_url, error = %err, "cannot use backend URL");
                Task::done(Message::EventsLoaded(Err(err)))
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_clock_subscription(self.browser.has_countdowns()),
            subscription::create_tick_subscription(
                self.browser.is_busy(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            browser: &self.browser,
            search_input: &self.search_input,
            thumbnails: &self.thumbnails,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
            viewport_width: self.viewport_width,
        })
    }
}
