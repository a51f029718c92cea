// SPDX-License-Identifier: MPL-2.0
//! Modal gallery state with stale-response protection.
//!
//! Every [`GalleryViewer::open`] issues a fresh [`RequestToken`]. A photo
//! response is committed only if it carries the latest token, so rapid
//! re-opening can never show one event's photos under another event's
//! header. Closing the modal invalidates the outstanding token as well.

use crate::domain::{Event, Photo};
use crate::error::{Error, Result};

/// Identifies one `open()` call; only the latest one may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Photos of the active event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Photos {
    Loading,
    Loaded(Vec<Photo>),
    Failed(Error),
}

/// The event shown in the modal header together with its photos.
///
/// Keeping both in one value is what guarantees they always change
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub event: Event,
    pub photos: Photos,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryViewer {
    session: Option<Session>,
    is_open: bool,
    generation: u64,
    pending: Option<RequestToken>,
}

impl GalleryViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `event` the active gallery and shows the modal right away.
    ///
    /// The previous photo list is dropped immediately. The caller must tag
    /// the photo request with the returned token.
    pub fn open(&mut self, event: Event) -> RequestToken {
        self.generation = self.generation.wrapping_add(1);
        let token = RequestToken(self.generation);
        self.session = Some(Session {
            event,
            photos: Photos::Loading,
        });
        self.is_open = true;
        self.pending = Some(token);
        token
    }

    /// Applies a photo response if `token` is still the latest request.
    ///
    /// Returns `true` when the response was committed, `false` when it was
    /// discarded as stale.
    pub fn commit(&mut self, token: RequestToken, result: Result<Vec<Photo>>) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        if let Some(session) = self.session.as_mut() {
            session.photos = match result {
                Ok(photos) => Photos::Loaded(photos),
                Err(err) => Photos::Failed(err),
            };
        }
        true
    }

    /// Hides the modal. Calling it while already closed changes nothing.
    pub fn close(&mut self) {
        self.is_open = false;
        self.pending = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the latest photo request is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the outstanding photo request, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<RequestToken> {
        self.pending
    }

    /// The visible session, if the modal is open.
    #[must_use]
    pub fn visible(&self) -> Option<&Session> {
        if self.is_open {
            self.session.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{event, photo};

    fn photos_of(gallery: &GalleryViewer) -> Option<&Photos> {
        gallery.visible().map(|session| &session.photos)
    }

    #[test]
    fn open_shows_header_before_photos_arrive() {
        let mut gallery = GalleryViewer::new();
        gallery.open(event("1", "Summer Bash", 3_600));

        let session = gallery.visible().unwrap();
        assert_eq!(session.event.title, "Summer Bash");
        assert_eq!(session.photos, Photos::Loading);
        assert!(gallery.is_loading());
    }

    #[test]
    fn commit_with_latest_token_fills_the_gallery() {
        let mut gallery = GalleryViewer::new();
        let token = gallery.open(event("1", "Summer Bash", 3_600));

        assert!(gallery.commit(token, Ok(vec![photo("p1", "u1")])));
        assert!(gallery.is_open());
        assert!(!gallery.is_loading());
        assert_eq!(
            photos_of(&gallery),
            Some(&Photos::Loaded(vec![photo("p1", "u1")]))
        );
    }

    #[test]
    fn stale_response_is_discarded_in_either_order() {
        let a_photos = vec![photo("a1", "ua")];
        let b_photos = vec![photo("b1", "ub")];

        // A resolves after B.
        let mut gallery = GalleryViewer::new();
        let a = gallery.open(event("a", "A", 60));
        let b = gallery.open(event("b", "B", 60));
        assert!(gallery.commit(b, Ok(b_photos.clone())));
        assert!(!gallery.commit(a, Ok(a_photos.clone())));
        assert_eq!(gallery.visible().unwrap().event.title, "B");
        assert_eq!(photos_of(&gallery), Some(&Photos::Loaded(b_photos.clone())));

        // A resolves before B.
        let mut gallery = GalleryViewer::new();
        let a = gallery.open(event("a", "A", 60));
        let b = gallery.open(event("b", "B", 60));
        assert!(!gallery.commit(a, Ok(a_photos)));
        assert_eq!(photos_of(&gallery), Some(&Photos::Loading));
        assert!(gallery.commit(b, Ok(b_photos.clone())));
        assert_eq!(photos_of(&gallery), Some(&Photos::Loaded(b_photos)));
    }

    #[test]
    fn reopening_drops_the_previous_list_immediately() {
        let mut gallery = GalleryViewer::new();
        let a = gallery.open(event("a", "A", 60));
        gallery.commit(a, Ok(vec![photo("a1", "ua")]));

        gallery.open(event("b", "B", 60));
        let session = gallery.visible().unwrap();
        assert_eq!(session.event.title, "B");
        assert_eq!(session.photos, Photos::Loading);
    }

    #[test]
    fn failure_is_explicit() {
        let mut gallery = GalleryViewer::new();
        let token = gallery.open(event("1", "Summer Bash", 60));
        let err = Error::Network("reset".into());

        assert!(gallery.commit(token, Err(err.clone())));
        assert_eq!(photos_of(&gallery), Some(&Photos::Failed(err)));
    }

    #[test]
    fn close_is_idempotent() {
        let mut gallery = GalleryViewer::new();
        let token = gallery.open(event("1", "Summer Bash", 60));
        gallery.commit(token, Ok(vec![photo("p1", "u1")]));

        gallery.close();
        let after_first = (gallery.is_open(), gallery.is_loading(), gallery.visible().cloned());
        gallery.close();
        let after_second = (gallery.is_open(), gallery.is_loading(), gallery.visible().cloned());
        assert_eq!(after_first, after_second);
        assert!(!gallery.is_open());
    }

    #[test]
    fn close_on_a_fresh_viewer_is_a_no_op() {
        let mut gallery = GalleryViewer::new();
        gallery.close();
        assert!(!gallery.is_open());
        assert!(gallery.visible().is_none());
    }

    #[test]
    fn response_after_close_does_not_reopen() {
        let mut gallery = GalleryViewer::new();
        let token = gallery.open(event("1", "Summer Bash", 60));
        gallery.close();

        assert!(!gallery.commit(token, Ok(vec![photo("p1", "u1")])));
        assert!(!gallery.is_open());
    }
}
