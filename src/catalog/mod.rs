//! Catalog production and consumption.
//!
//! `loader` reads the aggregated dataset document; `validate` checks artifact
//! authoring YAML against the catalog schema; `build` aggregates the YAML
//! files into the dataset the engines consume.

pub mod build;
pub mod loader;
pub mod validate;

pub use build::{BuildOutcome, build_dataset, compute_statistics, write_dataset};
pub use loader::load_dataset;
pub use validate::{ValidationReport, validate_directory, validate_file};
