//! Catalog build: aggregate artifact YAML files into one dataset document.
//!
//! Walks `artifacts/<category>/*.yml`, normalizes each record (category
//! defaulted from the directory name, `paths` normalized to a list by the
//! model, `search_tags` computed), computes the aggregate statistics, and
//! writes a single JSON document for the browsing surfaces.

use std::collections::BTreeSet;
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::artifact::ArtifactRecord;
use crate::core::dataset::{BuildInfo, Dataset, Statistics};
use crate::error::{RegdexError, Result};

use super::validate::is_artifact_file;

#[derive(Debug)]
pub struct BuildOutcome {
    pub dataset: Dataset,
    pub files_processed: usize,
    pub files_skipped: usize,
}

/// Aggregate every artifact file under `dir` into a dataset. Empty or
/// structurally broken files are skipped with a warning, not fatal.
pub fn build_dataset(dir: &Path) -> Result<BuildOutcome> {
    if !dir.is_dir() {
        return Err(RegdexError::BuildFailed(format!(
            "artifacts directory not found: {}",
            dir.display()
        )));
    }

    let mut artifacts = Vec::new();
    let mut files_processed = 0usize;
    let mut files_skipped = 0usize;

    for entry in WalkDir::new(dir)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| RegdexError::BuildFailed(format!("walk artifacts: {err}")))?;
        let path = entry.path();
        if !is_artifact_file(path) {
            continue;
        }
        files_processed += 1;

        match load_artifact(path) {
            Ok(record) => {
                debug!(target: "build", file = %path.display(), title = %record.title, "loaded");
                artifacts.push(record);
            }
            Err(err) => {
                warn!(target: "build", file = %path.display(), %err, "skipping artifact");
                files_skipped += 1;
            }
        }
    }

    let statistics = compute_statistics(&artifacts);
    let categories: Vec<String> = artifacts
        .iter()
        .map(|a| a.category.clone())
        .sorted()
        .dedup()
        .collect();

    let dataset = Dataset {
        total: artifacts.len(),
        build_info: Some(BuildInfo {
            total_files_processed: files_processed,
            valid_artifacts: artifacts.len(),
            categories: categories.len(),
            built_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }),
        last_updated: Some(chrono::Utc::now().to_rfc3339()),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        artifacts,
        categories,
        statistics,
    };

    Ok(BuildOutcome {
        dataset,
        files_processed,
        files_skipped,
    })
}

fn load_artifact(path: &Path) -> Result<ArtifactRecord> {
    let raw = std::fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Err(RegdexError::BuildFailed("empty artifact file".to_string()));
    }

    let mut record: ArtifactRecord = serde_yaml::from_str(&raw)?;
    record.id = Some(
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string(),
    );

    // Authoring files inside a category directory may omit the category.
    if record.category.trim().is_empty() {
        if let Some(dir_name) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
        {
            record.category = dir_name.to_string();
        }
    }

    record.search_tags = compute_search_tags(&record);
    Ok(record)
}

/// Search hooks: metadata tags, investigation types, the category, and a
/// `criticality-<level>` marker, deduplicated and sorted for a stable build.
fn compute_search_tags(record: &ArtifactRecord) -> Vec<String> {
    let mut tags: BTreeSet<String> = BTreeSet::new();
    tags.extend(record.metadata.tags.iter().cloned());
    tags.extend(record.metadata.investigation_types.iter().cloned());
    tags.insert(record.category.clone());
    if let Some(criticality) = record.criticality() {
        tags.insert(format!("criticality-{}", criticality.label()));
    }
    tags.into_iter().collect()
}

/// Aggregate counts over the final record list. Computed here once; the
/// browsing engines only display these.
pub fn compute_statistics(artifacts: &[ArtifactRecord]) -> Statistics {
    let mut stats = Statistics {
        total: artifacts.len(),
        ..Statistics::default()
    };
    let mut versions: BTreeSet<String> = BTreeSet::new();
    let mut authors: BTreeSet<String> = BTreeSet::new();

    for artifact in artifacts {
        *stats
            .by_category
            .entry(artifact.category.clone())
            .or_insert(0) += 1;

        let criticality = artifact
            .criticality()
            .map_or("unspecified", |c| c.label())
            .to_string();
        *stats.by_criticality.entry(criticality).or_insert(0) += 1;

        for investigation_type in &artifact.metadata.investigation_types {
            *stats
                .by_investigation_type
                .entry(investigation_type.clone())
                .or_insert(0) += 1;
        }

        versions.extend(artifact.metadata.windows_versions.iter().cloned());
        stats.tools_count += artifact.details.tools.len();

        if let Some(name) = artifact.author.as_ref().and_then(|a| a.name.clone()) {
            authors.insert(name);
        }
    }

    stats.windows_versions = versions.into_iter().collect();
    stats.authors = authors.into_iter().collect();
    stats
}

/// Write the dataset document, creating parent directories as needed.
pub fn write_dataset(dataset: &Dataset, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let payload = serde_json::to_string_pretty(dataset)?;
    std::fs::write(out, payload)?;
    Ok(())
}
