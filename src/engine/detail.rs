//! The detail-view state machine and per-section rendering.
//!
//! A fixed set of named sections with exactly one active at a time. Opening
//! a record always starts on Overview, even when reopening the record that
//! was just closed. Section rendering is a pure function of the record;
//! absent data renders an explicit placeholder so it cannot be mistaken for
//! a rendering failure.

use crate::core::artifact::{ArtifactRecord, NOT_DOCUMENTED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Limitations,
    Correlation,
    Structure,
    Examples,
    Tools,
    Investigation,
    References,
    Contribution,
}

impl Section {
    pub const ALL: [Self; 9] = [
        Self::Overview,
        Self::Limitations,
        Self::Correlation,
        Self::Structure,
        Self::Examples,
        Self::Tools,
        Self::Investigation,
        Self::References,
        Self::Contribution,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Limitations => "Limitations",
            Self::Correlation => "Correlation",
            Self::Structure => "Structure",
            Self::Examples => "Examples",
            Self::Tools => "Tools",
            Self::Investigation => "Investigation",
            Self::References => "References",
            Self::Contribution => "Contribution",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Modal selection state: which record is open and which section is active.
#[derive(Debug, Default)]
pub struct DetailView {
    selected: Option<(usize, Section)>,
}

impl DetailView {
    /// Open a record; the active section is always Overview.
    pub fn open(&mut self, record_index: usize) {
        self.selected = Some((record_index, Section::Overview));
    }

    /// Activate one section, deactivating whichever was active. No-op while
    /// closed.
    pub fn select(&mut self, section: Section) {
        if let Some((record, _)) = self.selected {
            self.selected = Some((record, section));
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn record_index(&self) -> Option<usize> {
        self.selected.map(|(record, _)| record)
    }

    pub fn section(&self) -> Option<Section> {
        self.selected.map(|(_, section)| section)
    }
}

/// Render one section of one record as display lines.
pub fn render_section(record: &ArtifactRecord, section: Section) -> Vec<String> {
    let lines = match section {
        Section::Overview => overview(record),
        Section::Limitations => list_or_empty(&record.limitations),
        Section::Correlation => correlation(record),
        Section::Structure => record
            .details
            .structure
            .as_ref()
            .map(|s| vec![s.clone()])
            .unwrap_or_default(),
        Section::Examples => list_or_empty(&record.details.examples),
        Section::Tools => tools(record),
        Section::Investigation => investigation(record),
        Section::References => references(record),
        Section::Contribution => contribution(record),
    };
    if lines.is_empty() {
        vec![NOT_DOCUMENTED.to_string()]
    } else {
        lines
    }
}

fn overview(record: &ArtifactRecord) -> Vec<String> {
    let mut lines = vec![record.description.clone()];
    if let Some(what) = &record.details.what {
        lines.push(String::new());
        lines.push(format!("What: {what}"));
    }
    if let Some(value) = &record.details.forensic_value {
        lines.push(String::new());
        lines.push(format!("Forensic value: {value}"));
    }
    lines.push(String::new());
    lines.push(format!(
        "Criticality: {}",
        record.criticality().map_or(NOT_DOCUMENTED, |c| c.label())
    ));
    lines.push(format!("Category: {}", record.category));
    if record.paths.is_empty() {
        lines.push(format!("Paths: {NOT_DOCUMENTED}"));
    } else {
        lines.push("Paths:".to_string());
        lines.extend(record.paths.iter().map(|p| format!("  {p}")));
    }
    lines
}

fn correlation(record: &ArtifactRecord) -> Vec<String> {
    if record.correlation.is_empty() {
        return Vec::new();
    }
    let mut lines = Vec::new();
    if !record
        .correlation
        .required_for_definitive_conclusions
        .is_empty()
    {
        lines.push("Required for definitive conclusions:".to_string());
        lines.extend(
            record
                .correlation
                .required_for_definitive_conclusions
                .iter()
                .map(|item| format!("  - {item}")),
        );
    }
    if !record.correlation.strengthens_evidence.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Strengthens evidence:".to_string());
        lines.extend(
            record
                .correlation
                .strengthens_evidence
                .iter()
                .map(|item| format!("  - {item}")),
        );
    }
    lines
}

fn tools(record: &ArtifactRecord) -> Vec<String> {
    record
        .details
        .tools
        .iter()
        .map(|tool| {
            let mut line = format!("- {}", tool.name());
            if let Some(url) = tool.url() {
                line.push_str(&format!(" ({url})"));
            }
            if let Some(description) = tool.description() {
                line.push_str(&format!(": {description}"));
            }
            line
        })
        .collect()
}

fn investigation(record: &ArtifactRecord) -> Vec<String> {
    let meta = &record.metadata;
    let mut lines = Vec::new();
    if !meta.investigation_types.is_empty() {
        lines.push(format!(
            "Investigation types: {}",
            meta.investigation_types.join(", ")
        ));
    }
    if !meta.windows_versions.is_empty() {
        lines.push(format!(
            "Windows versions: {}",
            meta.windows_versions.join(", ")
        ));
    }
    if !meta.tags.is_empty() {
        lines.push(format!("Tags: {}", meta.tags.join(", ")));
    }
    lines
}

fn references(record: &ArtifactRecord) -> Vec<String> {
    record
        .metadata
        .references
        .iter()
        .map(|reference| {
            let mut line = format!("- {}", reference.title);
            if let Some(kind) = &reference.reference_type {
                line.push_str(&format!(" [{kind}]"));
            }
            if let Some(url) = &reference.url {
                line.push_str(&format!(" {url}"));
            }
            line
        })
        .collect()
}

fn contribution(record: &ArtifactRecord) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(author) = &record.author {
        if let Some(name) = &author.name {
            lines.push(format!("Author: {name}"));
        }
        if let Some(org) = &author.organization {
            lines.push(format!("Organization: {org}"));
        }
        if let Some(github) = &author.github {
            lines.push(format!("GitHub: {github}"));
        }
    }
    if let Some(contribution) = &record.contribution {
        if let Some(date) = &contribution.date_added {
            lines.push(format!("Added: {date}"));
        }
        if let Some(date) = &contribution.last_updated {
            lines.push(format!("Updated: {date}"));
        }
        if let Some(version) = &contribution.version {
            lines.push(format!("Version: {version}"));
        }
    }
    lines
}

fn list_or_empty(items: &[String]) -> Vec<String> {
    items.iter().map(|item| format!("- {item}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Contribution.next(), Section::Overview);
        assert_eq!(Section::Overview.prev(), Section::Contribution);
    }

    #[test]
    fn test_select_while_closed_is_noop() {
        let mut view = DetailView::default();
        view.select(Section::Tools);
        assert!(!view.is_open());
        assert_eq!(view.section(), None);
    }
}
