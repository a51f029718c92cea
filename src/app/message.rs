// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::browser::RequestToken;
use crate::domain::{Event, Photo};
use crate::error::Error;
use crate::ui::notifications;
use crate::ui::{event_list, gallery_modal, search_bar};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded through a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    EventsLoaded(Result<Vec<Event>, Error>),
    SearchBar(search_bar::Message),
    EventList(event_list::Message),
    Gallery(gallery_modal::Message),
    /// Photo list response, tagged with the token of the `open` that issued it.
    PhotosLoaded {
        token: RequestToken,
        result: Result<Vec<Photo>, Error>,
    },
    /// Bytes of a cover or gallery image.
    ImageLoaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Result of the save dialog; `None` when the user cancelled.
    DownloadDestinationChosen {
        photo: Photo,
        path: Option<PathBuf>,
    },
    DownloadFinished {
        path: PathBuf,
        result: Result<u64, Error>,
    },
    Notification(notifications::NotificationMessage),
    /// One-second countdown tick.
    ClockTick(Instant),
    /// Housekeeping tick for spinners and toast timers.
    Tick(Instant),
    EscapePressed,
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Backend base URL; takes precedence over `PIXFLOW_BACKEND_URL` and
    /// the config file.
    pub backend_url: Option<String>,
    /// Takes precedence over `PIXFLOW_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `PIXFLOW_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
