// SPDX-License-Identifier: MPL-2.0
//! Decoded image handles for covers and gallery tiles, keyed by URL.
//!
//! Bytes are fetched once per URL; Iced decodes them when first drawn. The
//! cache is bounded so browsing many galleries does not grow memory without
//! limit.

use crate::error::Error;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub enum ThumbnailState {
    Loading,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug)]
pub struct Thumbnails {
    entries: LruCache<String, ThumbnailState>,
}

impl Thumbnails {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `url` as loading and returns `true` when it has to be fetched.
    ///
    /// URLs already loading, ready or failed are left alone so a flaky image
    /// is not refetched on every frame.
    pub fn request(&mut self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        if self.entries.contains(url) {
            return false;
        }
        self.entries.put(url.to_string(), ThumbnailState::Loading);
        true
    }

    /// Filters `urls` down to the ones that still need fetching, marking them.
    pub fn request_all<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        urls.into_iter()
            .filter(|url| self.request(url))
            .map(str::to_string)
            .collect()
    }

    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, Error>) {
        let state = match result {
            Ok(bytes) => ThumbnailState::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::debug!(%url, error = %err, "image fetch failed");
                ThumbnailState::Failed
            }
        };
        self.entries.put(url, state);
    }

    /// Read-only lookup for views; does not touch recency.
    #[must_use]
    pub fn state(&self, url: &str) -> Option<&ThumbnailState> {
        self.entries.peek(url)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> Thumbnails {
        Thumbnails::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn request_marks_loading_once() {
        let mut thumbnails = cache(4);
        assert!(thumbnails.request("https://cdn.example.com/a.jpg"));
        assert!(!thumbnails.request("https://cdn.example.com/a.jpg"));
        assert!(matches!(
            thumbnails.state("https://cdn.example.com/a.jpg"),
            Some(ThumbnailState::Loading)
        ));
    }

    #[test]
    fn empty_url_is_never_requested() {
        let mut thumbnails = cache(4);
        assert!(!thumbnails.request(""));
        assert!(thumbnails.state("").is_none());
    }

    #[test]
    fn finish_stores_ready_or_failed() {
        let mut thumbnails = cache(4);
        thumbnails.request("a");
        thumbnails.request("b");
        thumbnails.finish("a".into(), Ok(vec![0x89, b'P', b'N', b'G']));
        thumbnails.finish("b".into(), Err(Error::Network("reset".into())));

        assert!(matches!(thumbnails.state("a"), Some(ThumbnailState::Ready(_))));
        assert!(matches!(thumbnails.state("b"), Some(ThumbnailState::Failed)));
        assert!(!thumbnails.request("b"));
    }

    #[test]
    fn request_all_skips_known_urls_and_evicts_oldest() {
        let mut thumbnails = cache(2);
        let fetched = thumbnails.request_all(["a", "b", "a"]);
        assert_eq!(fetched, vec!["a".to_string(), "b".to_string()]);

        thumbnails.request("c");
        assert!(thumbnails.state("a").is_none());
        assert!(thumbnails.state("b").is_some());
        assert!(thumbnails.state("c").is_some());
    }
}
