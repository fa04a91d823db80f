//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod browse;
pub mod build;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod validate;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List artifacts with filters and sorting
    List(list::ListArgs),

    /// Free-text search over the catalog
    Search(search::SearchArgs),

    /// Show full details for one artifact
    Show(show::ShowArgs),

    /// Interactive catalog browser TUI
    Browse(browse::BrowseArgs),

    /// Display dataset statistics
    Stats(stats::StatsArgs),

    /// Validate artifact YAML files
    Validate(validate::ValidateArgs),

    /// Aggregate artifact YAML files into the dataset JSON
    Build(build::BuildArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::List(args) => list::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Browse(args) => browse::run(ctx, args),
        Commands::Stats(args) => stats::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Build(args) => build::run(ctx, args),
    }
}
