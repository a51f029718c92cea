// SPDX-License-Identifier: MPL-2.0
//! Event list holder and its search-filtered view.
//!
//! The store keeps the snapshot fetched at startup and a view made of
//! indices into that snapshot, so the filtered view can only ever contain
//! loaded events. Expired events are kept; only their countdown floors at
//! zero.

use crate::domain::{Event, EventId};
use crate::error::{Error, Result};

/// Progress of the one-shot event list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The request is still outstanding.
    Loading,
    /// A response has been applied (the list may legitimately be empty).
    Loaded,
    /// The request failed before any list was loaded.
    Failed(Error),
}

#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    /// Indices into `events`, in backend order.
    filtered: Vec<usize>,
    /// Active query as typed; matching uses its trimmed, lowercased form.
    query: String,
    state: LoadState,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            state: LoadState::Loading,
        }
    }

    /// Applies the result of the event list request.
    ///
    /// On success both the full set and the filtered view are replaced (the
    /// active query is re-applied). On failure the held events are left
    /// untouched and the error is returned to the caller; the state only
    /// becomes [`LoadState::Failed`] if nothing was loaded before.
    pub fn apply_load(&mut self, result: Result<Vec<Event>>) -> Result<()> {
        match result {
            Ok(events) => {
                self.events = events;
                self.state = LoadState::Loaded;
                self.refilter();
                Ok(())
            }
            Err(err) => {
                if self.state != LoadState::Loaded {
                    self.state = LoadState::Failed(err.clone());
                }
                Err(err)
            }
        }
    }

    /// Recomputes the filtered view for `query`.
    pub fn search(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.events, &self.query);
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Every loaded event, in backend order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events matching the active query, in backend order.
    pub fn filtered(&self) -> impl Iterator<Item = &Event> + '_ {
        self.filtered.iter().map(|&index| &self.events[index])
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }
}

/// Indices of `events` whose title contains `query`, ignoring case and the
/// query's surrounding whitespace. A blank query selects everything.
#[must_use]
pub fn filter_indices(events: &[Event], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..events.len()).collect();
    }
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.title.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::event;

    fn sample() -> Vec<Event> {
        vec![
            event("1", "Summer Bash", 3_600),
            event("2", "Winter Gala", -3_600),
            event("3", "Summer Camp Reunion", 86_400),
        ]
    }

    fn loaded() -> EventStore {
        let mut store = EventStore::new();
        store.apply_load(Ok(sample())).unwrap();
        store
    }

    fn ids(store: &EventStore) -> Vec<&str> {
        store.filtered().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn starts_loading_and_empty() {
        let store = EventStore::new();
        assert!(store.is_loading());
        assert_eq!(store.filtered_len(), 0);
    }

    #[test]
    fn load_success_replaces_full_and_filtered_sets() {
        let store = loaded();
        assert_eq!(store.state(), &LoadState::Loaded);
        assert_eq!(store.events().len(), 3);
        assert_eq!(ids(&store), ["1", "2", "3"]);
    }

    #[test]
    fn empty_response_is_loaded_not_failed() {
        let mut store = EventStore::new();
        store.apply_load(Ok(Vec::new())).unwrap();
        assert_eq!(store.state(), &LoadState::Loaded);
        assert_eq!(store.filtered_len(), 0);
    }

    #[test]
    fn initial_failure_is_surfaced_and_recorded() {
        let mut store = EventStore::new();
        let err = Error::Network("refused".into());
        assert_eq!(store.apply_load(Err(err.clone())), Err(err.clone()));
        assert_eq!(store.state(), &LoadState::Failed(err));
        assert!(store.events().is_empty());
    }

    #[test]
    fn failure_after_success_keeps_last_known_good_state() {
        let mut store = loaded();
        store.search("summer");
        let result = store.apply_load(Err(Error::MalformedPayload("eof".into())));
        assert!(result.is_err());
        assert_eq!(store.state(), &LoadState::Loaded);
        assert_eq!(store.events().len(), 3);
        assert_eq!(ids(&store), ["1", "3"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut store = loaded();
        store.search("winter");
        assert_eq!(ids(&store), ["2"]);
        store.search("SUMMER");
        assert_eq!(ids(&store), ["1", "3"]);
        store.search("amp re");
        assert_eq!(ids(&store), ["3"]);
    }

    #[test]
    fn empty_and_blank_queries_return_everything() {
        let mut store = loaded();
        store.search("gala");
        store.search("");
        assert_eq!(ids(&store), ["1", "2", "3"]);
        store.search("   ");
        assert_eq!(ids(&store), ["1", "2", "3"]);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let mut store = loaded();
        store.search("autumn");
        assert_eq!(store.filtered_len(), 0);
        assert_eq!(store.events().len(), 3);
    }

    #[test]
    fn query_typed_while_loading_applies_to_the_response() {
        let mut store = EventStore::new();
        store.search("gala");
        store.apply_load(Ok(sample())).unwrap();
        assert_eq!(ids(&store), ["2"]);
    }

    #[test]
    fn filtered_view_matches_the_definition_for_many_queries() {
        let events = sample();
        for query in ["", "s", "a", "bash", "Gala", "xyz", "summer c", "N"] {
            let expected: Vec<usize> = events
                .iter()
                .enumerate()
                .filter(|(_, e)| e.title.to_lowercase().contains(&query.to_lowercase()))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(filter_indices(&events, query), expected, "query {query:?}");
        }
    }

    #[test]
    fn get_finds_events_outside_the_filtered_view() {
        let mut store = loaded();
        store.search("winter");
        assert!(store.get(&EventId::new("1")).is_some());
        assert!(store.get(&EventId::new("9")).is_none());
    }
}
