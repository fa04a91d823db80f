//! Deterministic artifact ordering.
//!
//! Every key except the title pair tie-breaks by title ascending, so equal
//! primary keys still produce a total, reproducible order. An unknown key
//! string parses to `None` and leaves the list untouched.

use std::cmp::Ordering;

use crate::core::artifact::ArtifactRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    TitleDesc,
    Category,
    Criticality,
    Recent,
}

impl SortKey {
    /// Parse a user-supplied key. Unknown keys are a no-op, never an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(Self::Title),
            "title-desc" => Some(Self::TitleDesc),
            "category" => Some(Self::Category),
            "criticality" => Some(Self::Criticality),
            "recent" => Some(Self::Recent),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::TitleDesc => "title-desc",
            Self::Category => "category",
            Self::Criticality => "criticality",
            Self::Recent => "recent",
        }
    }
}

/// Compare two records under `key`.
pub fn compare(a: &ArtifactRecord, b: &ArtifactRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::TitleDesc => b.title.cmp(&a.title),
        SortKey::Category => a
            .category
            .cmp(&b.category)
            .then_with(|| a.title.cmp(&b.title)),
        SortKey::Criticality => {
            let rank_a = a.criticality().map_or(0, |c| c.rank());
            let rank_b = b.criticality().map_or(0, |c| c.rank());
            rank_b.cmp(&rank_a).then_with(|| a.title.cmp(&b.title))
        }
        SortKey::Recent => {
            // Missing date is treated as the minimal date, so undated
            // records sort after every dated one.
            let date_a = a.date_added().unwrap_or("");
            let date_b = b.date_added().unwrap_or("");
            date_b.cmp(date_a).then_with(|| a.title.cmp(&b.title))
        }
    }
}

/// Sort in place. `None` means no reordering.
pub fn sort_records(records: &mut [&ArtifactRecord], key: Option<SortKey>) {
    if let Some(key) = key {
        records.sort_by(|a, b| compare(a, b, key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_parses_to_none() {
        assert_eq!(SortKey::parse("relevance"), None);
        assert_eq!(SortKey::parse(""), None);
        assert_eq!(SortKey::parse("title"), Some(SortKey::Title));
    }

    #[test]
    fn test_labels_round_trip() {
        for key in [
            SortKey::Title,
            SortKey::TitleDesc,
            SortKey::Category,
            SortKey::Criticality,
            SortKey::Recent,
        ] {
            assert_eq!(SortKey::parse(key.label()), Some(key));
        }
    }
}
