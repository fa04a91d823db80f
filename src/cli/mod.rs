//! Command-line interface definition

pub mod commands;
pub mod output;

use clap::{ArgAction, Parser};

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "regdex",
    version,
    about = "Searchable reference catalog of Windows Registry forensic artifacts",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset path or URL (defaults to REGDEX_DATASET or site/build/artifacts.json)
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    pub const fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}
