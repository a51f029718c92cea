// SPDX-License-Identifier: MPL-2.0
//! Event browsing state machine, independent of the UI toolkit.
//!
//! [`Browser`] owns every piece of mutable browsing state and exposes it
//! through a small set of mutation methods. The application root is its only
//! owner; views receive shared references and emit messages.
//!
//! ```text
//! Loading --events resolved--> Listing --open--> GalleryOpen
//!                               ^   |               |
//!                               +---+ search        | close
//!                               +-------------------+
//! ```

pub mod clock;
pub mod gallery;
pub mod store;

pub use clock::CountdownClock;
pub use gallery::{GalleryViewer, Photos, RequestToken, Session};
pub use store::{EventStore, LoadState};

use crate::domain::{Event, EventId, Photo};
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Coarse phase of the browsing interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The initial event request is outstanding.
    Loading,
    /// Events (or an explicit load error) are displayed.
    Listing,
    /// The gallery modal is shown on top of the listing.
    GalleryOpen,
}

#[derive(Debug, Clone)]
pub struct Browser {
    store: EventStore,
    clock: CountdownClock,
    gallery: GalleryViewer,
}

impl Browser {
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            store: EventStore::new(),
            clock: CountdownClock::new(now),
            gallery: GalleryViewer::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.store.is_loading() {
            Phase::Loading
        } else if self.gallery.is_open() {
            Phase::GalleryOpen
        } else {
            Phase::Listing
        }
    }

    /// Applies the event list response. See [`EventStore::apply_load`].
    pub fn apply_events(&mut self, result: Result<Vec<Event>>) -> Result<()> {
        self.store.apply_load(result)
    }

    pub fn search(&mut self, query: &str) {
        self.store.search(query);
    }

    /// Opens the gallery of a loaded event.
    ///
    /// Returns the event to fetch photos for and the token to tag the
    /// request with, or `None` if the id is unknown.
    pub fn open(&mut self, id: &EventId) -> Option<(Event, RequestToken)> {
        let event = self.store.get(id)?.clone();
        let token = self.gallery.open(event.clone());
        Some((event, token))
    }

    /// Commits a photo response; `false` means it was stale and dropped.
    pub fn commit_photos(&mut self, token: RequestToken, result: Result<Vec<Photo>>) -> bool {
        self.gallery.commit(token, result)
    }

    pub fn close(&mut self) {
        self.gallery.close();
    }

    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.clock.tick(now);
    }

    /// Whether any countdown is currently displayed, i.e. whether the
    /// shared one-second tick is needed.
    #[must_use]
    pub fn has_countdowns(&self) -> bool {
        self.phase() != Phase::Loading && self.store.filtered_len() > 0
    }

    /// Whether something is waiting on the network (drives spinners).
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.store.is_loading() || (self.gallery.is_open() && self.gallery.is_loading())
    }

    #[must_use]
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    #[must_use]
    pub fn clock(&self) -> &CountdownClock {
        &self.clock
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryViewer {
        &self.gallery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::{event, photo, reference_now};

    fn scenario() -> Browser {
        let mut browser = Browser::new(reference_now());
        browser
            .apply_events(Ok(vec![
                event("1", "Summer Bash", 3_600),
                event("2", "Winter Gala", -3_600),
            ]))
            .unwrap();
        browser
    }

    #[test]
    fn phases_follow_the_state_machine() {
        let mut browser = Browser::new(reference_now());
        assert_eq!(browser.phase(), Phase::Loading);

        browser
            .apply_events(Ok(vec![event("1", "Summer Bash", 3_600)]))
            .unwrap();
        assert_eq!(browser.phase(), Phase::Listing);

        browser.search("bash");
        assert_eq!(browser.phase(), Phase::Listing);

        browser.open(&EventId::new("1")).unwrap();
        assert_eq!(browser.phase(), Phase::GalleryOpen);

        browser.close();
        assert_eq!(browser.phase(), Phase::Listing);
    }

    #[test]
    fn failed_initial_load_leaves_loading_phase() {
        let mut browser = Browser::new(reference_now());
        assert!(browser
            .apply_events(Err(Error::Network("refused".into())))
            .is_err());
        assert_eq!(browser.phase(), Phase::Listing);
        assert!(matches!(browser.store().state(), LoadState::Failed(_)));
    }

    #[test]
    fn winter_search_and_zeroed_countdown() {
        let mut browser = scenario();
        browser.search("winter");

        let visible: Vec<&Event> = browser.store().filtered().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "2");
        assert_eq!(browser.clock().display(visible[0].expires_at), "0d 0h 0m 0s");
    }

    #[test]
    fn opening_summer_bash_shows_its_single_photo() {
        let mut browser = scenario();
        let (opened, token) = browser.open(&EventId::new("1")).unwrap();
        assert_eq!(opened.title, "Summer Bash");

        assert!(browser.commit_photos(token, Ok(vec![photo("p1", "u1")])));
        let session = browser.gallery().visible().unwrap();
        assert_eq!(session.event.title, "Summer Bash");
        match &session.photos {
            Photos::Loaded(photos) => {
                assert_eq!(photos.len(), 1);
                assert_eq!(photos[0].watermarked_url, "u1");
            }
            other => panic!("expected loaded photos, got {other:?}"),
        }
    }

    #[test]
    fn open_unknown_event_is_ignored() {
        let mut browser = scenario();
        assert!(browser.open(&EventId::new("404")).is_none());
        assert_eq!(browser.phase(), Phase::Listing);
    }

    #[test]
    fn countdown_tick_only_needed_with_visible_cards() {
        let mut browser = Browser::new(reference_now());
        assert!(!browser.has_countdowns());

        browser
            .apply_events(Ok(vec![event("1", "Summer Bash", 3_600)]))
            .unwrap();
        assert!(browser.has_countdowns());

        browser.search("nothing matches");
        assert!(!browser.has_countdowns());
    }

    #[test]
    fn busy_while_loading_events_or_photos() {
        let mut browser = Browser::new(reference_now());
        assert!(browser.is_busy());

        browser
            .apply_events(Ok(vec![event("1", "Summer Bash", 3_600)]))
            .unwrap();
        assert!(!browser.is_busy());

        let (_, token) = browser.open(&EventId::new("1")).unwrap();
        assert!(browser.is_busy());
        browser.commit_photos(token, Ok(Vec::new()));
        assert!(!browser.is_busy());
    }
}
