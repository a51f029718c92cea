// SPDX-License-Identifier: MPL-2.0
//! REST client for the events backend.
//!
//! Endpoints:
//!
//! - `GET {base}/api/events` → `[Event]`
//! - `GET {base}/api/events/{id}/photos` → `[Photo]`
//!
//! Bodies are read fully and decoded with `serde_json`, so a transport
//! failure and a malformed payload surface as different errors.

use crate::domain::{Event, EventId, Photo};
use crate::error::{Error, Result};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("PixFlow/", env!("CARGO_PKG_VERSION"));

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client for `base_url` (e.g. `http://localhost:8000`).
    ///
    /// `timeout` bounds each whole request; `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn events_url(&self) -> Url {
        self.endpoint(&["api", "events"])
    }

    /// The event id is encoded as a single path segment.
    #[must_use]
    pub fn photos_url(&self, id: &EventId) -> Url {
        self.endpoint(&["api", "events", id.as_str(), "photos"])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `parse_base_url` rejects cannot-be-a-base URLs, so this always applies.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        let url = self.events_url();
        tracing::debug!(%url, "fetching events");
        let events: Vec<Event> = self.get_json(url).await?;
        tracing::info!(count = events.len(), "events loaded");
        Ok(events)
    }

    pub async fn fetch_photos(&self, id: &EventId) -> Result<Vec<Photo>> {
        let url = self.photos_url(id);
        tracing::debug!(%url, event = %id, "fetching photos");
        let photos: Vec<Photo> = self.get_json(url).await?;
        tracing::info!(count = photos.len(), event = %id, "photos loaded");
        Ok(photos)
    }

    /// Fetches raw bytes of an image resource (covers, thumbnails).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let url = self.resolve(url)?;
        let response = self.send(url).await?;
        let bytes = response.bytes().await.map_err(Error::from)?;
        Ok(bytes.to_vec())
    }

    /// Resolves a resource reference. Absolute URLs are kept; relative
    /// ones are joined onto the backend base URL.
    pub fn resolve(&self, reference: &str) -> Result<Url> {
        self.base_url
            .join(reference)
            .map_err(|e| Error::InvalidUrl(format!("{reference}: {e}")))
    }

    pub(crate) async fn send(&self, url: Url) -> Result<reqwest::Response> {
        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            Error::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "backend returned an error status");
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.send(url).await?;
        let body = response.bytes().await.map_err(Error::from)?;
        decode(&body)
    }
}

/// Decodes a JSON body into `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "malformed payload");
        Error::from(e)
    })
}

/// Parses and normalizes the backend base URL.
///
/// Trailing slashes are removed and only `http`/`https` are accepted.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!("{raw}: expected an http(s) URL")));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, None).unwrap()
    }

    #[test]
    fn events_url_is_built_from_base() {
        let api = client("http://localhost:8000");
        assert_eq!(api.events_url().as_str(), "http://localhost:8000/api/events");
    }

    #[test]
    fn trailing_slash_and_prefix_path_are_respected() {
        let api = client("https://pix.example.com/backend/");
        assert_eq!(
            api.events_url().as_str(),
            "https://pix.example.com/backend/api/events"
        );
    }

    #[test]
    fn photos_url_encodes_the_event_id() {
        let api = client("http://localhost:8000");
        assert_eq!(
            api.photos_url(&EventId::new("665f1c")).as_str(),
            "http://localhost:8000/api/events/665f1c/photos"
        );
        assert_eq!(
            api.photos_url(&EventId::new("a/b c")).as_str(),
            "http://localhost:8000/api/events/a%2Fb%20c/photos"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            parse_base_url("localhost:8000"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_base_url("ftp://files.example.com"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(parse_base_url(""), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn resolve_keeps_absolute_and_joins_relative() {
        let api = client("http://localhost:8000");
        assert_eq!(
            api.resolve("https://cdn.example.com/p/1.jpg").unwrap().as_str(),
            "https://cdn.example.com/p/1.jpg"
        );
        assert_eq!(
            api.resolve("/media/wm/1.jpg").unwrap().as_str(),
            "http://localhost:8000/media/wm/1.jpg"
        );
    }

    #[test]
    fn decode_reports_malformed_payloads() {
        let err = decode::<Vec<Event>>(br#"{"error": "boom"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));

        let photos: Vec<Photo> = decode(br#"[{"_id":"p1","watermarked_url":"u1"}]"#).unwrap();
        assert_eq!(photos[0].watermarked_url, "u1");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let api = client("http://127.0.0.1:9");
        let err = api.fetch_events().await.unwrap_err();
        assert!(matches!(err, Error::Network(_)), "got {err:?}");
    }
}
