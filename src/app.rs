use crate::catalog::load_dataset;
use crate::cli::output::OutputFormat;
use crate::core::dataset::Dataset;
use crate::error::Result;

/// Default dataset location, relative to the working directory. This is the
/// file `regdex build` writes.
pub const DEFAULT_DATASET: &str = "site/build/artifacts.json";

pub struct AppContext {
    pub dataset_source: String,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let dataset_source = cli
            .dataset
            .clone()
            .or_else(|| std::env::var("REGDEX_DATASET").ok())
            .unwrap_or_else(|| DEFAULT_DATASET.to_string());

        Self {
            dataset_source,
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        }
    }

    /// One-shot dataset load. Failure is fatal to the command; there is no
    /// retry.
    pub fn load_dataset(&self) -> Result<Dataset> {
        load_dataset(&self.dataset_source)
    }
}
