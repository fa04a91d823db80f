//! regdex show - Full detail view of one artifact, section by section

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::core::artifact::ArtifactRecord;
use crate::core::dataset::Dataset;
use crate::engine::detail::{Section, render_section};
use crate::error::{RegdexError, Result};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Artifact id or title (title match is case-insensitive)
    pub artifact: String,

    /// Show only one section
    #[arg(long)]
    pub section: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let dataset = ctx.load_dataset()?;
    let record = find_artifact(&dataset, &args.artifact)
        .ok_or_else(|| RegdexError::ArtifactNotFound(args.artifact.clone()))?;

    if ctx.output_format == OutputFormat::Json {
        return emit_json(record);
    }

    let sections: Vec<Section> = match args.section.as_deref() {
        Some(wanted) => {
            let section = Section::ALL
                .into_iter()
                .find(|s| s.label().eq_ignore_ascii_case(wanted))
                .ok_or_else(|| {
                    RegdexError::Config(format!("unknown section '{wanted}'"))
                })?;
            vec![section]
        }
        None => Section::ALL.to_vec(),
    };

    let mut layout = HumanLayout::new();
    layout.title(&record.title);
    for section in sections {
        layout.section(section.label());
        for line in render_section(record, section) {
            layout.push_line(line);
        }
        layout.blank();
    }
    emit_human(layout);
    Ok(())
}

/// Resolve by id first, then by case-insensitive title.
fn find_artifact<'a>(dataset: &'a Dataset, needle: &str) -> Option<&'a ArtifactRecord> {
    dataset
        .artifacts
        .iter()
        .find(|a| a.id.as_deref() == Some(needle))
        .or_else(|| {
            dataset
                .artifacts
                .iter()
                .find(|a| a.title.eq_ignore_ascii_case(needle))
        })
}
