//! regdex - Searchable reference catalog of Windows Registry forensic artifacts
//!
//! The crate is split into:
//! - [`core`]: the artifact data model and dataset aggregate
//! - [`engine`]: pure filter/sort engines plus the view and detail state
//!   controllers that drive rendering
//! - [`catalog`]: dataset loading, artifact YAML validation, and the build
//!   step that aggregates authoring files into one dataset document
//! - [`cli`] / [`tui`]: the command-line and terminal surfaces

pub mod app;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod tui;

pub use error::{RegdexError, Result};
