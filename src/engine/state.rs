//! The view-state controller.
//!
//! Owns the dataset, the filter state, the sort key, and the derived result
//! list for one browsing session. Search input is debounced: each keystroke
//! replaces the pending deadline, and [`ViewState::tick`] fires the
//! recomputation once the delay elapses with no further input. Every other
//! facet change recomputes immediately.

use std::time::{Duration, Instant};

use crate::core::artifact::{ArtifactRecord, Criticality};
use crate::core::dataset::Dataset;
use crate::engine::filter::{FilterState, matches};
use crate::engine::sort::{SortKey, compare};

/// Keystroke-collapse delay for the free-text search input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct ViewState {
    dataset: Dataset,
    filters: FilterState,
    sort: Option<SortKey>,
    /// Indices into `dataset.artifacts`, filtered and sorted.
    results: Vec<usize>,
    /// In-flight search edit and its debounce deadline. A newer keystroke
    /// replaces this; timers never stack.
    pending_search: Option<(String, Instant)>,
}

impl ViewState {
    pub fn new(dataset: Dataset) -> Self {
        let mut state = Self {
            dataset,
            filters: FilterState::default(),
            sort: None,
            results: Vec::new(),
            pending_search: None,
        };
        state.recompute();
        state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    /// The current search text as the user sees it, including a pending
    /// not-yet-applied edit.
    pub fn search_text(&self) -> &str {
        self.pending_search
            .as_ref()
            .map(|(q, _)| q.as_str())
            .or(self.filters.search.as_deref())
            .unwrap_or("")
    }

    /// Record a search edit; the recomputation fires from `tick` once
    /// `SEARCH_DEBOUNCE` passes without another edit.
    pub fn set_search(&mut self, query: impl Into<String>, now: Instant) {
        self.pending_search = Some((query.into(), now + SEARCH_DEBOUNCE));
    }

    /// Apply a pending search edit whose deadline has passed. Returns true
    /// when the result list was recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = matches!(&self.pending_search, Some((_, deadline)) if now >= *deadline);
        if !due {
            return false;
        }
        if let Some((query, _)) = self.pending_search.take() {
            self.filters.search = if query.trim().is_empty() {
                None
            } else {
                Some(query)
            };
            self.recompute();
        }
        true
    }

    /// Select a category, or clear with `None`. The quick-filter buttons and
    /// the category dropdown both funnel through here, so only one category
    /// is ever active.
    pub fn set_category(&mut self, category: Option<String>) {
        self.filters.category = category;
        self.recompute();
    }

    /// Toggle a quick-category button: selecting the active category clears
    /// it, selecting another replaces it.
    pub fn toggle_category(&mut self, category: &str) {
        if self.filters.category.as_deref() == Some(category) {
            self.filters.category = None;
        } else {
            self.filters.category = Some(category.to_string());
        }
        self.recompute();
    }

    pub fn set_criticality(&mut self, criticality: Option<Criticality>) {
        self.filters.criticality = criticality;
        self.recompute();
    }

    pub fn set_investigation_type(&mut self, investigation_type: Option<String>) {
        self.filters.investigation_type = investigation_type;
        self.recompute();
    }

    pub fn set_windows_version(&mut self, version: Option<String>) {
        self.filters.windows_version = version;
        self.recompute();
    }

    pub fn set_hive(&mut self, hive: Option<String>) {
        self.filters.hive = hive;
        self.recompute();
    }

    pub fn set_has_tools(&mut self, has_tools: Option<bool>) {
        self.filters.has_tools = has_tools;
        self.recompute();
    }

    pub fn set_sort(&mut self, key: Option<SortKey>) {
        self.sort = key;
        self.recompute();
    }

    /// Atomically reset every facet (including an in-flight search edit) and
    /// recompute synchronously.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.pending_search = None;
        self.recompute();
    }

    pub fn visible_count(&self) -> usize {
        self.results.len()
    }

    /// Dataset indices of the current result list.
    pub fn result_indices(&self) -> &[usize] {
        &self.results
    }

    pub fn results(&self) -> impl Iterator<Item = &ArtifactRecord> {
        self.results.iter().map(|&i| &self.dataset.artifacts[i])
    }

    pub fn artifact(&self, index: usize) -> Option<&ArtifactRecord> {
        self.dataset.artifacts.get(index)
    }

    fn recompute(&mut self) {
        self.results = self
            .dataset
            .artifacts
            .iter()
            .enumerate()
            .filter(|(_, r)| matches(r, &self.filters))
            .map(|(i, _)| i)
            .collect();
        if let Some(key) = self.sort {
            let artifacts = &self.dataset.artifacts;
            self.results
                .sort_by(|&a, &b| compare(&artifacts[a], &artifacts[b], key));
        }
    }
}
