//! Shared fixtures for integration tests.
#![allow(dead_code)]

use regdex::core::{
    ArtifactRecord, Contribution, Correlation, Criticality, Dataset, Details, Metadata, ToolRef,
};

/// A bare record with only the required fields set.
pub fn record(title: &str, category: &str) -> ArtifactRecord {
    ArtifactRecord {
        id: None,
        title: title.to_string(),
        category: category.to_string(),
        description: format!("{title} description"),
        paths: Vec::new(),
        details: Details::default(),
        metadata: Metadata::default(),
        limitations: Vec::new(),
        correlation: Correlation::default(),
        author: None,
        contribution: None,
        search_tags: Vec::new(),
    }
}

pub fn with_paths(mut r: ArtifactRecord, paths: &[&str]) -> ArtifactRecord {
    r.paths = paths.iter().map(|p| (*p).to_string()).collect();
    r
}

pub fn with_criticality(mut r: ArtifactRecord, criticality: Criticality) -> ArtifactRecord {
    r.metadata.criticality = Some(criticality);
    r
}

pub fn with_tags(mut r: ArtifactRecord, tags: &[&str]) -> ArtifactRecord {
    r.metadata.tags = tags.iter().map(|t| (*t).to_string()).collect();
    r
}

pub fn with_tools(mut r: ArtifactRecord, names: &[&str]) -> ArtifactRecord {
    r.details.tools = names
        .iter()
        .map(|n| ToolRef::Named((*n).to_string()))
        .collect();
    r
}

pub fn with_date_added(mut r: ArtifactRecord, date: &str) -> ArtifactRecord {
    r.contribution = Some(Contribution {
        date_added: Some(date.to_string()),
        last_updated: None,
        version: None,
    });
    r
}

pub fn with_investigation_types(mut r: ArtifactRecord, types: &[&str]) -> ArtifactRecord {
    r.metadata.investigation_types = types.iter().map(|t| (*t).to_string()).collect();
    r
}

pub fn with_windows_versions(mut r: ArtifactRecord, versions: &[&str]) -> ArtifactRecord {
    r.metadata.windows_versions = versions.iter().map(|v| (*v).to_string()).collect();
    r
}

/// The three-record scenario used across filter/sort tests: A and B share a
/// category, C differs; criticalities and titles are chosen so category
/// filtering and both sort orders are distinguishable.
pub fn scenario_records() -> Vec<ArtifactRecord> {
    vec![
        with_criticality(record("Zed", "program-execution"), Criticality::High),
        with_criticality(record("Alpha", "program-execution"), Criticality::Low),
        with_criticality(record("Mid", "network-infrastructure"), Criticality::High),
    ]
}

pub fn dataset(artifacts: Vec<ArtifactRecord>) -> Dataset {
    Dataset {
        total: artifacts.len(),
        statistics: regdex::catalog::compute_statistics(&artifacts),
        categories: {
            let mut categories: Vec<String> =
                artifacts.iter().map(|a| a.category.clone()).collect();
            categories.sort();
            categories.dedup();
            categories
        },
        artifacts,
        last_updated: None,
        version: None,
        build_info: None,
    }
}
