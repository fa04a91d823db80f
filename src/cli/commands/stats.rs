//! regdex stats - Display the dataset's precomputed statistics
//!
//! The statistics are computed by the build step; this command only displays
//! them.

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct StatsArgs {}

pub fn run(ctx: &AppContext, _args: &StatsArgs) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let stats = &dataset.statistics;

    if ctx.output_format == OutputFormat::Json {
        return emit_json(stats);
    }

    let mut layout = HumanLayout::new();
    layout.title("Catalog statistics");
    layout.kv("Total artifacts", &stats.total.to_string());
    layout.kv("Categories", &dataset.categories.len().to_string());
    layout.kv("High criticality", &stats.high_criticality().to_string());
    layout.kv("Documented tools", &stats.tools_count.to_string());
    layout.kv("Contributors", &stats.authors.len().to_string());

    layout.blank();
    layout.section("By category");
    for (category, count) in &stats.by_category {
        layout.bullet(&format!("{category}: {count}"));
    }

    layout.blank();
    layout.section("By criticality");
    for (criticality, count) in &stats.by_criticality {
        layout.bullet(&format!("{criticality}: {count}"));
    }

    if !stats.windows_versions.is_empty() {
        layout.blank();
        layout.section("Windows versions covered");
        for version in &stats.windows_versions {
            layout.bullet(version);
        }
    }

    emit_human(layout);
    Ok(())
}
