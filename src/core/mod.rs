//! Core artifact data model

pub mod artifact;
pub mod dataset;

pub use artifact::{
    ArtifactRecord, Author, Contribution, Correlation, Criticality, Details, Metadata, Reference,
    ToolRef,
};
pub use dataset::{BuildInfo, Dataset, Statistics};
