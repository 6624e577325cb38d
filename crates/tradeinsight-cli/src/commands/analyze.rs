//! One-shot analysis command

use anyhow::{Context, Result};
use tradeinsight_core::{generate, AnalysisCategory, AnalysisRequest, Dataset};

use super::default_origin;
use crate::render;

pub fn cmd_analyze(
    dataset: &Dataset,
    category: &str,
    origin: Option<&str>,
    volume: f64,
    price: f64,
    exclude: Option<String>,
    json: bool,
) -> Result<()> {
    let category: AnalysisCategory = category
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("See `tradeinsight categories` for valid ids")?;

    let origin = match origin {
        Some(origin) => origin.to_string(),
        None => default_origin(dataset)?,
    };

    let request = AnalysisRequest {
        category,
        origin,
        volume,
        price,
        exclude_origin: exclude,
    };
    let report = generate(dataset, &request);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut stdout = std::io::stdout();
        render::render_report(&mut stdout, &report)?;
    }
    Ok(())
}
