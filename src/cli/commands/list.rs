//! regdex list - Filtered, sorted artifact listing

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::core::artifact::{ArtifactRecord, Criticality};
use crate::engine::filter::{FilterState, filter};
use crate::engine::sort::{SortKey, sort_records};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Free-text search (case-insensitive substring)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Filter by category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by criticality: high, medium, low
    #[arg(long)]
    pub criticality: Option<String>,

    /// Filter by investigation type
    #[arg(long)]
    pub investigation_type: Option<String>,

    /// Filter by Windows version
    #[arg(long)]
    pub windows_version: Option<String>,

    /// Filter by registry hive (HKLM, HKCU, HKCR, HKU, HKCC)
    #[arg(long)]
    pub hive: Option<String>,

    /// Filter by tool presence: yes or no
    #[arg(long)]
    pub has_tools: Option<String>,

    /// Sort by: title, title-desc, category, criticality, recent
    #[arg(long)]
    pub sort: Option<String>,

    /// Maximum number of artifacts to show
    #[arg(long, short = 'n', default_value = "50")]
    pub limit: usize,
}

impl ListArgs {
    /// Map CLI flags onto the engine's filter state. Unknown criticality or
    /// tri-state values fall back to unset rather than erroring, matching
    /// the engine's unknown-key policy.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search: self.search.clone(),
            category: self.category.clone(),
            criticality: self
                .criticality
                .as_deref()
                .and_then(Criticality::parse),
            investigation_type: self.investigation_type.clone(),
            windows_version: self.windows_version.clone(),
            hive: self.hive.clone(),
            has_tools: self.has_tools.as_deref().and_then(|v| match v {
                "yes" => Some(true),
                "no" => Some(false),
                _ => None,
            }),
        }
    }
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let state = args.filter_state();
    let sort_key = args.sort.as_deref().and_then(SortKey::parse);

    let mut records = filter(&dataset.artifacts, &state);
    sort_records(&mut records, sort_key);

    debug!(
        target: "list",
        total = dataset.artifacts.len(),
        visible = records.len(),
        sort = sort_key.map(SortKey::label),
        "listing artifacts"
    );

    let records: Vec<&ArtifactRecord> = records.into_iter().take(args.limit).collect();

    match ctx.output_format {
        OutputFormat::Human => display_human(&records, dataset.artifacts.len()),
        OutputFormat::Json => {
            let entries: Vec<ArtifactCard> = records.iter().map(|r| ArtifactCard::from(*r)).collect();
            emit_json(&serde_json::json!({
                "status": "ok",
                "total": dataset.artifacts.len(),
                "visible": entries.len(),
                "artifacts": entries,
            }))
        }
    }
}

/// Result-card projection: what a list row shows.
#[derive(Debug, Serialize)]
pub struct ArtifactCard {
    pub title: String,
    pub category: String,
    pub criticality: Option<String>,
    pub primary_path: String,
    pub description: String,
    /// At most five tags are surfaced on a card.
    pub tags: Vec<String>,
}

impl From<&ArtifactRecord> for ArtifactCard {
    fn from(record: &ArtifactRecord) -> Self {
        Self {
            title: record.title.clone(),
            category: record.category.clone(),
            criticality: record.criticality().map(|c| c.label().to_string()),
            primary_path: record.primary_path().to_string(),
            description: record.description.clone(),
            tags: record.metadata.tags.iter().take(5).cloned().collect(),
        }
    }
}

fn display_human(records: &[&ArtifactRecord], total: usize) -> Result<()> {
    let mut layout = HumanLayout::new();
    layout.title(&format!("Artifacts ({} of {total})", records.len()));

    for record in records {
        let criticality = record.criticality().map_or("unrated", |c| c.label());
        layout.push_line(format!(
            "{}  [{}] [{criticality}]",
            record.title, record.category
        ));
        layout.push_line(format!("  {}", record.primary_path()));
        layout.push_line(format!("  {}", record.description));
        let tags: Vec<&str> = record
            .metadata
            .tags
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        if !tags.is_empty() {
            layout.push_line(format!("  tags: {}", tags.join(", ")));
        }
        layout.blank();
    }

    if records.is_empty() {
        layout.push_line("No artifacts match the current filters.");
    }

    emit_human(layout);
    Ok(())
}
