//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `wizard` - Interactive six-step diagnostic flow
//! - `analyze` - One-shot analysis without the wizard
//! - `brief` - Standalone market overview
//! - `categories` - Analysis category listing
//! - `dataset` - Synthetic dataset generation
//! - `prompt` - LLM prompt inspection

pub mod analyze;
pub mod brief;
pub mod categories;
pub mod dataset;
pub mod prompt;
pub mod wizard;

// Re-export command functions for main.rs
pub use analyze::*;
pub use brief::*;
pub use categories::*;
pub use dataset::*;
pub use prompt::*;
pub use wizard::*;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tradeinsight_core::{market, Dataset, Error};

/// Load the dataset from disk, or build a synthetic one when `--demo` is set.
///
/// A missing file is surfaced with guidance instead of being silently
/// replaced by placeholder data.
pub fn load_dataset(path: &Path, demo: bool) -> Result<Dataset> {
    if demo {
        return Ok(Dataset::synthetic(
            tradeinsight_core::dataset::SYNTHETIC_ROWS,
            None,
        ));
    }
    tracing::debug!(path = %path.display(), "Loading dataset");
    match Dataset::from_csv_path(path) {
        Err(Error::DatasetMissing(p)) => bail!(
            "Dataset file not found: {}. Generate one with `tradeinsight dataset generate` \
             or run with --demo for a synthetic dataset.",
            p.display()
        ),
        other => other.with_context(|| format!("Failed to load dataset from {}", path.display())),
    }
}

/// Target origin to analyze when the user did not name one
pub fn default_origin(dataset: &Dataset) -> Result<String> {
    market::most_common_origin(dataset).context("Dataset has no records")
}
