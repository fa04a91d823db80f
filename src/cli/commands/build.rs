//! regdex build - Aggregate artifact YAML files into the dataset JSON
//!
//! This is the producer side of the catalog: it walks the authoring
//! directory, normalizes records, computes statistics, and writes the single
//! dataset document the browsing surfaces load.

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::catalog::build::{build_dataset, write_dataset};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Artifact authoring directory
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Output dataset path
    #[arg(long, short = 'o', default_value = "site/build/artifacts.json")]
    pub output: PathBuf,
}

pub fn run(ctx: &AppContext, args: &BuildArgs) -> Result<()> {
    let outcome = build_dataset(&args.artifacts_dir)?;
    write_dataset(&outcome.dataset, &args.output)?;

    let stats = &outcome.dataset.statistics;

    if ctx.output_format == OutputFormat::Json {
        return emit_json(&serde_json::json!({
            "status": "ok",
            "output": args.output.display().to_string(),
            "files_processed": outcome.files_processed,
            "files_skipped": outcome.files_skipped,
            "artifacts": outcome.dataset.total,
            "categories": outcome.dataset.categories.len(),
            "statistics": stats,
        }));
    }

    let mut layout = HumanLayout::new();
    layout.title("Catalog build");
    layout.kv("Files processed", &outcome.files_processed.to_string());
    layout.kv("Skipped", &outcome.files_skipped.to_string());
    layout.kv("Artifacts", &outcome.dataset.total.to_string());
    layout.kv("Categories", &outcome.dataset.categories.len().to_string());
    layout.kv("Documented tools", &stats.tools_count.to_string());
    layout.kv("Output", &args.output.display().to_string());

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

    emit_human(layout);
    Ok(())
}
