//! regdex search - Free-text search shortcut over the catalog

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::list::{self, ListArgs};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    pub query: String,

    /// Sort by: title, title-desc, category, criticality, recent
    #[arg(long)]
    pub sort: Option<String>,

    /// Maximum number of artifacts to show
    #[arg(long, short = 'n', default_value = "50")]
    pub limit: usize,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let list_args = ListArgs {
        search: Some(args.query.clone()),
        category: None,
        criticality: None,
        investigation_type: None,
        windows_version: None,
        hive: None,
        has_tools: None,
        sort: args.sort.clone(),
        limit: args.limit,
    };
    list::run(ctx, &list_args)
}
