//! View-state controller: debounce, clear-all, exclusive categories.

mod common;

use std::time::{Duration, Instant};

use common::{dataset, scenario_records};
use regdex::core::Criticality;
use regdex::engine::{SEARCH_DEBOUNCE, SortKey, ViewState};

fn visible_titles(state: &ViewState) -> Vec<String> {
    state.results().map(|r| r.title.clone()).collect()
}

#[test]
fn starts_with_full_dataset_in_load_order() {
    let state = ViewState::new(dataset(scenario_records()));
    assert_eq!(state.visible_count(), 3);
    assert_eq!(visible_titles(&state), ["Zed", "Alpha", "Mid"]);
}

#[test]
fn search_applies_only_after_debounce() {
    let mut state = ViewState::new(dataset(scenario_records()));
    let start = Instant::now();

    state.set_search("alpha", start);
    // Before the deadline nothing recomputes.
    assert!(!state.tick(start + Duration::from_millis(10)));
    assert_eq!(state.visible_count(), 3);

    assert!(state.tick(start + SEARCH_DEBOUNCE));
    assert_eq!(visible_titles(&state), ["Alpha"]);
}

#[test]
fn rapid_keystrokes_collapse_to_one_recompute() {
    let mut state = ViewState::new(dataset(scenario_records()));
    let start = Instant::now();

    state.set_search("a", start);
    state.set_search("al", start + Duration::from_millis(100));
    // The first deadline has passed but a newer keystroke replaced it.
    assert!(!state.tick(start + SEARCH_DEBOUNCE + Duration::from_millis(50)));

    assert!(state.tick(start + Duration::from_millis(100) + SEARCH_DEBOUNCE));
    assert_eq!(visible_titles(&state), ["Alpha"]);
    // Nothing pending afterwards.
    assert!(!state.tick(start + Duration::from_secs(10)));
}

#[test]
fn non_search_facets_apply_immediately() {
    let mut state = ViewState::new(dataset(scenario_records()));
    state.set_criticality(Some(Criticality::High));
    assert_eq!(visible_titles(&state), ["Zed", "Mid"]);
    state.set_category(Some("program-execution".to_string()));
    assert_eq!(visible_titles(&state), ["Zed"]);
}

#[test]
fn quick_category_toggle_is_exclusive() {
    let mut state = ViewState::new(dataset(scenario_records()));

    state.toggle_category("program-execution");
    assert_eq!(state.filters().category.as_deref(), Some("program-execution"));

    // Selecting another category replaces the first; only one is active.
    state.toggle_category("network-infrastructure");
    assert_eq!(
        state.filters().category.as_deref(),
        Some("network-infrastructure")
    );
    assert_eq!(visible_titles(&state), ["Mid"]);

    // Toggling the active category clears it.
    state.toggle_category("network-infrastructure");
    assert_eq!(state.filters().category, None);
    assert_eq!(state.visible_count(), 3);
}

#[test]
fn clear_filters_restores_everything_atomically() {
    let mut state = ViewState::new(dataset(scenario_records()));
    let start = Instant::now();

    state.set_category(Some("program-execution".to_string()));
    state.set_criticality(Some(Criticality::High));
    state.set_search("run", start);
    state.tick(start + SEARCH_DEBOUNCE);
    assert!(state.visible_count() < 3);

    state.clear_filters();
    assert!(state.filters().is_empty());
    assert_eq!(state.search_text(), "");
    assert_eq!(visible_titles(&state), ["Zed", "Alpha", "Mid"]);
    // A pending search edit is cancelled too.
    assert!(!state.tick(start + Duration::from_secs(5)));
}

#[test]
fn sort_key_applies_to_filtered_results() {
    let mut state = ViewState::new(dataset(scenario_records()));
    state.set_category(Some("program-execution".to_string()));
    state.set_sort(Some(SortKey::Title));
    assert_eq!(visible_titles(&state), ["Alpha", "Zed"]);

    state.set_sort(Some(SortKey::Criticality));
    assert_eq!(visible_titles(&state), ["Zed", "Alpha"]);

    state.set_sort(None);
    assert_eq!(visible_titles(&state), ["Zed", "Alpha"]);
}

#[test]
fn search_text_reflects_pending_edit() {
    let mut state = ViewState::new(dataset(scenario_records()));
    let start = Instant::now();
    state.set_search("al", start);
    // The UI shows the keystroke immediately even though the filter has not
    // recomputed yet.
    assert_eq!(state.search_text(), "al");
    assert_eq!(state.visible_count(), 3);
}
