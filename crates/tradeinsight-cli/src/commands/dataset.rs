//! Dataset management commands

use std::path::Path;

use anyhow::{bail, Context, Result};
use tradeinsight_core::Dataset;

pub fn cmd_dataset_generate(
    output: &Path,
    rows: usize,
    seed: Option<u64>,
    force: bool,
) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists. Pass --force to overwrite it.",
            output.display()
        );
    }

    let dataset = Dataset::synthetic(rows, seed);
    let file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    dataset.write_csv(file)?;

    println!(
        "✅ Wrote {} synthetic trade records to {}",
        dataset.len(),
        output.display()
    );
    println!("   Origins: {}", dataset.origins().join(", "));
    Ok(())
}
