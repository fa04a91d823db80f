//! The artifact record and its nested sections.
//!
//! Every field other than `title`, `category`, and `description` is optional
//! in authoring files. Absence is represented with `Option`/empty defaults and
//! the accessors below define the degraded value once, so consuming code never
//! re-derives placeholder behavior ad hoc.

use serde::{Deserialize, Deserializer, Serialize};

/// Registry hive prefixes recognized by the hive filter and path validation.
pub const HIVE_PREFIXES: [&str; 5] = ["HKLM", "HKCU", "HKCR", "HKU", "HKCC"];

/// Shown wherever optional record data is absent.
pub const NOT_DOCUMENTED: &str = "Not documented.";

/// One documented registry location and its forensic metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// File stem, stamped by the build step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    /// May be absent in authoring files; the build step defaults it from the
    /// category directory name.
    #[serde(default)]
    pub category: String,
    pub description: String,
    /// Registry path locations. Authoring files may use a single string;
    /// it is normalized to a one-element list on load.
    #[serde(default, deserialize_with = "string_or_seq")]
    pub paths: Vec<String>,
    #[serde(default)]
    pub details: Details,
    #[serde(default)]
    pub metadata: Metadata,
    /// What this artifact cannot prove on its own.
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub correlation: Correlation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribution: Option<Contribution>,
    /// Extra free-text search hooks computed by the build step; never shown
    /// in the UI.
    #[serde(default)]
    pub search_tags: Vec<String>,
}

impl ArtifactRecord {
    /// First path, for card display. Placeholder when `paths` is empty.
    pub fn primary_path(&self) -> &str {
        self.paths.first().map_or(NOT_DOCUMENTED, String::as_str)
    }

    pub fn criticality(&self) -> Option<Criticality> {
        self.metadata.criticality
    }

    pub fn has_tools(&self) -> bool {
        !self.details.tools.is_empty()
    }

    pub fn date_added(&self) -> Option<&str> {
        self.contribution
            .as_ref()
            .and_then(|c| c.date_added.as_deref())
    }

    /// Lowercased haystack for substring search: title, description,
    /// category, all paths, all search tags, all metadata tags, space-joined.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(
            3 + self.paths.len() + self.search_tags.len() + self.metadata.tags.len(),
        );
        parts.push(&self.title);
        parts.push(&self.description);
        parts.push(&self.category);
        parts.extend(self.paths.iter().map(String::as_str));
        parts.extend(self.search_tags.iter().map(String::as_str));
        parts.extend(self.metadata.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// True when at least one path is rooted at `hive` (prefix match on
    /// `<hive>\`, not substring containment).
    pub fn in_hive(&self, hive: &str) -> bool {
        let prefix = format!("{hive}\\");
        self.paths.iter().any(|p| p.starts_with(&prefix))
    }
}

/// Detailed forensic explanation sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Details {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forensic_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub tools: Vec<ToolRef>,
}

/// A tool entry is either a bare name or an object with a URL. The shape is
/// resolved once at the deserialization boundary; rendering never re-detects
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolRef {
    Named(String),
    Linked {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl ToolRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) | Self::Linked { name, .. } => name,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Named(_) => None,
            Self::Linked { url, .. } => url.as_deref(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Named(_) => None,
            Self::Linked { description, .. } => description.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criticality: Option<Criticality>,
    #[serde(default)]
    pub investigation_types: Vec<String>,
    #[serde(default)]
    pub windows_versions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduced: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

/// Investigator-assigned priority tier for an artifact's evidentiary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    High,
    Medium,
    Low,
}

impl Criticality {
    /// Sort rank: high outranks medium outranks low; unset records rank 0.
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,
}

/// Other evidence needed to corroborate conclusions drawn from this artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Correlation {
    #[serde(default)]
    pub required_for_definitive_conclusions: Vec<String>,
    #[serde(default)]
    pub strengthens_evidence: Vec<String>,
}

impl Correlation {
    pub fn is_empty(&self) -> bool {
        self.required_for_definitive_conclusions.is_empty() && self.strengthens_evidence.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contribution {
    /// `YYYY-MM-DD`; lexical order on this format is chronological order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrSeq {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrSeq::deserialize(deserializer)? {
        StringOrSeq::One(path) => vec![path],
        StringOrSeq::Many(paths) => paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_accept_single_string() {
        let record: ArtifactRecord = serde_yaml::from_str(
            "title: Run Keys\ncategory: persistence-methods\ndescription: Autostart entries\npaths: HKLM\\Software\\Microsoft\\Windows\\CurrentVersion\\Run\n",
        )
        .unwrap();
        assert_eq!(record.paths.len(), 1);
        assert_eq!(
            record.primary_path(),
            "HKLM\\Software\\Microsoft\\Windows\\CurrentVersion\\Run"
        );
    }

    #[test]
    fn test_tools_accept_bare_and_linked_forms() {
        let details: Details = serde_yaml::from_str(
            "tools:\n  - Registry Explorer\n  - name: RECmd\n    url: https://ericzimmerman.github.io/\n",
        )
        .unwrap();
        assert_eq!(details.tools.len(), 2);
        assert_eq!(details.tools[0].name(), "Registry Explorer");
        assert_eq!(details.tools[0].url(), None);
        assert_eq!(details.tools[1].name(), "RECmd");
        assert_eq!(details.tools[1].url(), Some("https://ericzimmerman.github.io/"));
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let record: ArtifactRecord = serde_yaml::from_str(
            "title: Minimal\ncategory: program-execution\ndescription: Bare record\n",
        )
        .unwrap();
        assert!(record.paths.is_empty());
        assert_eq!(record.primary_path(), NOT_DOCUMENTED);
        assert!(record.criticality().is_none());
        assert!(!record.has_tools());
        assert!(record.correlation.is_empty());
    }

    #[test]
    fn test_hive_prefix_is_not_substring() {
        let record: ArtifactRecord = serde_yaml::from_str(
            "title: Nested hive mention\ncategory: system-modifications\ndescription: Path mentioning HKLM mid-string\npaths:\n  - HKCU\\Software\\Backup\\HKLM\\Copy\n",
        )
        .unwrap();
        assert!(record.in_hive("HKCU"));
        assert!(!record.in_hive("HKLM"));
    }

    #[test]
    fn test_searchable_text_lowercases_all_parts() {
        let record: ArtifactRecord = serde_yaml::from_str(
            "title: Teams Hooks\ncategory: communication-apps\ndescription: Microsoft Teams traces\npaths:\n  - HKCU\\Software\\Microsoft\\Teams\nmetadata:\n  tags: [Collaboration]\nsearch_tags: [IM]\n",
        )
        .unwrap();
        let text = record.searchable_text();
        assert!(text.contains("teams hooks"));
        assert!(text.contains("collaboration"));
        assert!(text.contains("im"));
        assert!(!text.contains("Teams"));
    }
}
