//! Multi-predicate artifact filtering.
//!
//! Each facet is optional; an unset facet is always satisfied. Active facets
//! combine with logical AND. Filtering is pure and preserves the relative
//! order of records that pass.

use crate::core::artifact::{ArtifactRecord, Criticality};

/// The full set of independent filter facets.
///
/// Initialized empty at UI start, mutated by interaction handlers, reset
/// atomically by [`FilterState::clear`]. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring query over the record's searchable text.
    pub search: Option<String>,
    pub category: Option<String>,
    pub criticality: Option<Criticality>,
    pub investigation_type: Option<String>,
    pub windows_version: Option<String>,
    /// Registry hive token, matched as a path prefix.
    pub hive: Option<String>,
    /// `Some(true)` requires documented tools, `Some(false)` requires none.
    pub has_tools: Option<bool>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reset every facet in one step.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// True when `record` satisfies every active facet.
pub fn matches(record: &ArtifactRecord, state: &FilterState) -> bool {
    if let Some(query) = state.search.as_deref() {
        let query = query.trim().to_lowercase();
        if !query.is_empty() && !record.searchable_text().contains(&query) {
            return false;
        }
    }

    if let Some(category) = state.category.as_deref() {
        if record.category != category {
            return false;
        }
    }

    if let Some(criticality) = state.criticality {
        // Records without a criticality never match a set criticality facet.
        if record.criticality() != Some(criticality) {
            return false;
        }
    }

    if let Some(investigation_type) = state.investigation_type.as_deref() {
        if !record
            .metadata
            .investigation_types
            .iter()
            .any(|t| t == investigation_type)
        {
            return false;
        }
    }

    if let Some(version) = state.windows_version.as_deref() {
        if !record.metadata.windows_versions.iter().any(|v| v == version) {
            return false;
        }
    }

    if let Some(hive) = state.hive.as_deref() {
        if !record.in_hive(hive) {
            return false;
        }
    }

    if let Some(wants_tools) = state.has_tools {
        if record.has_tools() != wants_tools {
            return false;
        }
    }

    true
}

/// Filter `artifacts` down to the records satisfying `state`, preserving
/// input order. With every facet unset this is the identity.
pub fn filter<'a>(artifacts: &'a [ArtifactRecord], state: &FilterState) -> Vec<&'a ArtifactRecord> {
    artifacts.iter().filter(|r| matches(r, state)).collect()
}
