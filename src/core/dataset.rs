//! The dataset aggregate: artifact list, category enumeration, statistics.
//!
//! Produced by `catalog::build`, consumed read-only by the engines. The
//! engines never recompute `statistics`; they only display it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::artifact::ArtifactRecord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Load order is display order when no sort key is active.
    #[serde(default)]
    pub artifacts: Vec<ArtifactRecord>,
    /// Distinct categories present, sorted.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_info: Option<BuildInfo>,
}

/// Aggregate counts precomputed by the build step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub by_category: BTreeMap<String, usize>,
    /// Keys are criticality labels plus "unspecified" for records without one.
    #[serde(default)]
    pub by_criticality: BTreeMap<String, usize>,
    #[serde(default)]
    pub by_investigation_type: BTreeMap<String, usize>,
    #[serde(default)]
    pub windows_versions: Vec<String>,
    #[serde(default)]
    pub tools_count: usize,
    #[serde(default)]
    pub authors: Vec<String>,
}

impl Statistics {
    pub fn high_criticality(&self) -> usize {
        self.by_criticality.get("high").copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildInfo {
    pub total_files_processed: usize,
    pub valid_artifacts: usize,
    pub categories: usize,
    pub built_at: String,
}
