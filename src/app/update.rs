// SPDX-License-Identifier: MPL-2.0
//! Message handling and the async tasks it spawns.

use super::{App, Message};
use crate::browser::RequestToken;
use crate::config::SPINNER_STEP_RADIANS;
use crate::domain::{Event, EventId, Photo};
use crate::error::Error;
use crate::infrastructure::{download, ApiClient};
use crate::ui::notifications::Notification;
use crate::ui::{event_list, gallery_modal, search_bar};
use chrono::Utc;
use iced::Task;
use std::f32::consts::TAU;
use std::path::PathBuf;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::EventsLoaded(result) => handle_events_loaded(app, result),
        Message::SearchBar(message) => {
            if let search_bar::Event::Search(query) =
                search_bar::update(message, &mut app.search_input)
            {
                app.browser.search(&query);
                app.browser.tick(Utc::now());
            }
            Task::none()
        }
        Message::EventList(event_list::Message::Open(id)) => handle_open(app, &id),
        Message::Gallery(gallery_modal::Message::Close) | Message::EscapePressed => {
            app.browser.close();
            app.browser.tick(Utc::now());
            fetch_covers(app)
        }
        Message::Gallery(gallery_modal::Message::Download(photo)) => {
            handle_download_request(app, photo)
        }
        Message::PhotosLoaded { token, result } => handle_photos_loaded(app, token, result),
        Message::ImageLoaded { url, result } => {
            app.thumbnails.finish(url, result);
            Task::none()
        }
        Message::DownloadDestinationChosen { photo, path } => match path {
            Some(path) => handle_download_destination(app, &photo, path),
            None => {
                tracing::debug!(photo = %photo.id, "download cancelled");
                Task::none()
            }
        },
        Message::DownloadFinished { path, result } => {
            handle_download_finished(app, &path, result);
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::ClockTick(_) => {
            app.browser.tick(Utc::now());
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick(now);
            if app.browser.is_busy() {
                app.spinner_rotation = (app.spinner_rotation + SPINNER_STEP_RADIANS) % TAU;
            }
            Task::none()
        }
        Message::WindowResized(size) => {
            app.viewport_width = size.width;
            Task::none()
        }
    }
}

pub(super) fn fetch_events(api: ApiClient) -> Task<Message> {
    Task::perform(
        async move { api.fetch_events().await },
        Message::EventsLoaded,
    )
}

fn fetch_photos(api: ApiClient, event: Event, token: RequestToken) -> Task<Message> {
    Task::perform(
        async move { api.fetch_photos(&event.id).await },
        move |result| Message::PhotosLoaded { token, result },
    )
}

/// Fetches every image in `urls` that is not cached or in flight yet.
fn fetch_images(app: &mut App, urls: Vec<String>) -> Task<Message> {
    let Some(api) = app.api.as_ref() else {
        return Task::none();
    };
    let pending = app.thumbnails.request_all(urls.iter().map(String::as_str));
    if pending.is_empty() {
        return Task::none();
    }
    tracing::debug!(count = pending.len(), "fetching images");

    Task::batch(pending.into_iter().map(|url| {
        let api = api.clone();
        Task::perform(
            async move {
                let result = api.fetch_bytes(&url).await;
                (url, result)
            },
            |(url, result)| Message::ImageLoaded { url, result },
        )
    }))
}

/// Requests covers of every loaded event. Covers evicted by a large
/// gallery are fetched again.
fn fetch_covers(app: &mut App) -> Task<Message> {
    let covers = app
        .browser
        .store()
        .events()
        .iter()
        .map(|event| event.cover_url.clone())
        .collect();
    fetch_images(app, covers)
}

fn handle_events_loaded(app: &mut App, result: Result<Vec<Event>, Error>) -> Task<Message> {
    app.browser.tick(Utc::now());
    match app.browser.apply_events(result) {
        Ok(()) => fetch_covers(app),
        Err(err) => {
            tracing::error!(error = %err, "cannot load events");
            app.notifications
                .push(Notification::error("notification-events-load-error"));
            Task::none()
        }
    }
}

fn handle_open(app: &mut App, id: &EventId) -> Task<Message> {
    let Some((event, token)) = app.browser.open(id) else {
        tracing::warn!(event = %id, "open requested for an unknown event");
        return Task::none();
    };
    tracing::debug!(event = %event.id, "opening gallery");

    match app.api.clone() {
        Some(api) => fetch_photos(api, event, token),
        None => {
            app.browser.commit_photos(
                token,
                Err(Error::InvalidUrl("no usable backend URL".to_string())),
            );
            Task::none()
        }
    }
}

fn handle_photos_loaded(
    app: &mut App,
    token: RequestToken,
    result: Result<Vec<Photo>, Error>,
) -> Task<Message> {
    let urls: Vec<String> = result
        .as_ref()
        .map(|photos| photos.iter().map(|p| p.watermarked_url.clone()).collect())
        .unwrap_or_default();

    if let Err(err) = &result {
        tracing::warn!(error = %err, "cannot load photos");
    }
    if !app.browser.commit_photos(token, result) {
        tracing::debug!(?token, "discarding stale photo response");
        return Task::none();
    }
    fetch_images(app, urls)
}

fn handle_download_request(app: &mut App, photo: Photo) -> Task<Message> {
    let file_name = download::suggested_file_name(&photo);
    let last_directory = app.app_state.last_download_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&file_name);
            if let Some(dir) = last_directory.filter(|dir| dir.exists()) {
                dialog = dialog.set_directory(&dir);
            }
            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::DownloadDestinationChosen { photo, path },
    )
}

fn handle_download_destination(app: &mut App, photo: &Photo, path: PathBuf) -> Task<Message> {
    let Some(api) = app.api.clone() else {
        handle_download_finished(
            app,
            &path,
            Err(Error::InvalidUrl("no usable backend URL".to_string())),
        );
        return Task::none();
    };

    app.app_state.set_last_download_directory_from_file(&path);
    if let Some(key) = app.app_state.save() {
        app.notifications.push(Notification::warning(key));
    }

    let url = photo.watermarked_url.clone();
    Task::perform(
        async move {
            let result = download::download_to(&api, &url, &path).await;
            (path, result)
        },
        |(path, result)| Message::DownloadFinished { path, result },
    )
}

fn handle_download_finished(app: &mut App, path: &std::path::Path, result: Result<u64, Error>) {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match result {
        Ok(_) => app
            .notifications
            .push(Notification::success("notification-download-success").with_arg("file", file)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "download failed");
            app.notifications.push(
                Notification::error("notification-download-error")
                    .with_arg("file", file)
                    .with_arg("reason", app.i18n.tr(err.i18n_key())),
            );
        }
    }
}
