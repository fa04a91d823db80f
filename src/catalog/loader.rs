//! One-shot dataset loading.
//!
//! The dataset is fetched exactly once per session from a file path or an
//! HTTP(S) URL. Any failure (I/O, non-success status, JSON parse) is fatal
//! and surfaced as a single readable message; there is no retry.

use tracing::debug;

use crate::core::dataset::Dataset;
use crate::error::{RegdexError, Result};

/// Load the dataset from `source`, which may be a filesystem path or an
/// `http(s)://` URL. The returned structure is treated as read-only by every
/// consumer.
pub fn load_dataset(source: &str) -> Result<Dataset> {
    let raw = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)?
    } else {
        std::fs::read_to_string(source)
            .map_err(|err| RegdexError::DatasetLoad(format!("read {source}: {err}")))?
    };

    let dataset: Dataset = serde_json::from_str(&raw)
        .map_err(|err| RegdexError::DatasetLoad(format!("parse {source}: {err}")))?;
    debug!(
        target: "loader",
        artifacts = dataset.artifacts.len(),
        categories = dataset.categories.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

fn fetch_url(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url)
        .map_err(|err| RegdexError::DatasetLoad(format!("fetch {url}: {err}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(RegdexError::DatasetLoad(format!("fetch {url}: HTTP {status}")));
    }
    response
        .text()
        .map_err(|err| RegdexError::DatasetLoad(format!("read body {url}: {err}")))
}
