//! regdex browse - Interactive catalog browser TUI

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human};
use crate::engine::detail::{Section, render_section};
use crate::error::{RegdexError, Result};
use crate::tui::run_browse_tui;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Initial search query
    #[arg(long)]
    pub query: Option<String>,

    /// Initial category filter
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

pub fn run(ctx: &AppContext, args: &BrowseArgs) -> Result<()> {
    // Cannot run the TUI in robot mode
    if ctx.output_format != OutputFormat::Human {
        return Err(RegdexError::Config(
            "browse requires an interactive terminal (cannot use --robot)".to_string(),
        ));
    }

    let dataset = ctx.load_dataset()?;
    let selected = run_browse_tui(dataset, args.query.clone(), args.category.clone())?;

    // If an artifact was picked, print its full detail after the terminal is
    // restored.
    if let Some(record) = selected {
        let mut layout = HumanLayout::new();
        layout.title(&record.title);
        for section in Section::ALL {
            layout.section(section.label());
            for line in render_section(&record, section) {
                layout.push_line(line);
            }
            layout.blank();
        }
        emit_human(layout);
    }

    Ok(())
}
