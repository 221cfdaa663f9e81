use crate::saved_ids::SavedIdSet;
use crate::search_result::SearchResult;
use std::collections::HashMap;

/// Where the page is in its search cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Results,
    SearchFailed,
}

/// Save state of a single result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Unsaved,
    Saving,
    Saved,
    SaveFailed,
}

/// State of the search page.
///
/// Network calls happen outside; this only records what the page shows
/// before and after each call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchPage {
    input: String,
    phase: SearchPhase,
    results: Vec<SearchResult>,
    saved_ids: SavedIdSet,
    in_flight: HashMap<String, SaveStatus>,
}

impl SearchPage {
    pub fn new(saved_ids: SavedIdSet) -> Self {
        Self {
            saved_ids,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn saved_ids(&self) -> &SavedIdSet {
        &self.saved_ids
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Start a search for the current input.
    ///
    /// Returns the trimmed query, or `None` (leaving the page untouched) when
    /// the input is blank.
    pub fn begin_search(&mut self) -> Option<String> {
        let query = self.input.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_string();
        self.phase = SearchPhase::Searching;
        Some(query)
    }

    /// Replace the whole result set and clear the input.
    pub fn finish_search(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.in_flight.clear();
        self.input.clear();
        self.phase = SearchPhase::Results;
    }

    /// Previous results stay visible and the input is kept for another try.
    pub fn fail_search(&mut self) {
        self.phase = SearchPhase::SearchFailed;
    }

    pub fn begin_save(&mut self, id: &str) {
        self.in_flight.insert(id.to_string(), SaveStatus::Saving);
    }

    pub fn finish_save(&mut self, id: &str) {
        self.in_flight.remove(id);
        self.saved_ids.insert(id);
    }

    pub fn fail_save(&mut self, id: &str) {
        self.in_flight.insert(id.to_string(), SaveStatus::SaveFailed);
    }

    /// Drop any in-flight marker, as if the save was never attempted.
    pub fn reset_save(&mut self, id: &str) {
        self.in_flight.remove(id);
    }

    pub fn save_status(&self, id: &str) -> SaveStatus {
        if self.saved_ids.contains(id) {
            return SaveStatus::Saved;
        }
        self.in_flight.get(id).copied().unwrap_or_default()
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved_ids.contains(id)
    }

    /// Whether the save affordance for `id` should be disabled.
    ///
    /// Advisory only; nothing below the UI enforces it.
    pub fn save_disabled(&self, id: &str) -> bool {
        matches!(
            self.save_status(id),
            SaveStatus::Saved | SaveStatus::Saving
        )
    }
}
