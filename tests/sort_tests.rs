//! Sort engine behavior: comparators, tie-breaking, unknown keys.

mod common;

use common::{record, scenario_records, with_criticality, with_date_added};
use regdex::core::Criticality;
use regdex::engine::{SortKey, sort_records};

fn titles(records: &[&regdex::core::ArtifactRecord]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn title_ascending_and_descending() {
    let records = scenario_records();
    let mut refs: Vec<_> = records.iter().collect();

    sort_records(&mut refs, Some(SortKey::Title));
    assert_eq!(titles(&refs), ["Alpha", "Mid", "Zed"]);

    sort_records(&mut refs, Some(SortKey::TitleDesc));
    assert_eq!(titles(&refs), ["Zed", "Mid", "Alpha"]);
}

#[test]
fn criticality_tiers_with_title_tie_break() {
    let records = vec![
        with_criticality(record("Delta", "system-modifications"), Criticality::Medium),
        record("Unrated", "system-modifications"),
        with_criticality(record("Bravo", "system-modifications"), Criticality::High),
        with_criticality(record("Echo", "system-modifications"), Criticality::Low),
        with_criticality(record("Alpha", "system-modifications"), Criticality::High),
    ];
    let mut refs: Vec<_> = records.iter().collect();
    sort_records(&mut refs, Some(SortKey::Criticality));
    // high < medium < low < unset, titles ascending within each tier.
    assert_eq!(titles(&refs), ["Alpha", "Bravo", "Delta", "Echo", "Unrated"]);
}

#[test]
fn recent_puts_undated_records_last() {
    let records = vec![
        record("Undated", "user-behaviour"),
        with_date_added(record("Old", "user-behaviour"), "2021-03-14"),
        with_date_added(record("New", "user-behaviour"), "2024-11-01"),
    ];
    let mut refs: Vec<_> = records.iter().collect();
    sort_records(&mut refs, Some(SortKey::Recent));
    assert_eq!(titles(&refs), ["New", "Old", "Undated"]);
}

#[test]
fn category_sorts_then_breaks_ties_by_title() {
    let records = scenario_records();
    let mut refs: Vec<_> = records.iter().collect();
    sort_records(&mut refs, Some(SortKey::Category));
    assert_eq!(titles(&refs), ["Mid", "Alpha", "Zed"]);
}

#[test]
fn no_key_preserves_input_order() {
    let records = scenario_records();
    let mut refs: Vec<_> = records.iter().collect();
    sort_records(&mut refs, None);
    assert_eq!(titles(&refs), ["Zed", "Alpha", "Mid"]);
}

#[test]
fn unknown_key_string_is_identity() {
    assert_eq!(SortKey::parse("shuffle"), None);
    let records = scenario_records();
    let mut refs: Vec<_> = records.iter().collect();
    sort_records(&mut refs, SortKey::parse("shuffle"));
    assert_eq!(titles(&refs), ["Zed", "Alpha", "Mid"]);
}

#[test]
fn scenario_sorts_are_independent_of_filtering() {
    // Filter category=program-execution, then sort by criticality and title.
    let records = scenario_records();
    let state = regdex::engine::FilterState {
        category: Some("program-execution".to_string()),
        ..Default::default()
    };
    let mut refs = regdex::engine::filter(&records, &state);
    assert_eq!(titles(&refs), ["Zed", "Alpha"]);

    sort_records(&mut refs, Some(SortKey::Criticality));
    assert_eq!(titles(&refs), ["Zed", "Alpha"]);

    sort_records(&mut refs, Some(SortKey::Title));
    assert_eq!(titles(&refs), ["Alpha", "Zed"]);
}
