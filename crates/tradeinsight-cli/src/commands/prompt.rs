//! LLM prompt inspection command

use anyhow::{Context, Result};
use tradeinsight_core::{market, prompts, AnalysisCategory, AnalysisRequest, Dataset};

use super::default_origin;

pub fn cmd_prompt(
    dataset: &Dataset,
    category: &str,
    origin: Option<&str>,
    volume: f64,
    price: f64,
) -> Result<()> {
    let category: AnalysisCategory = category
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("See `tradeinsight categories` for valid ids")?;

    let origin = match origin {
        Some(origin) => origin.to_string(),
        None => default_origin(dataset)?,
    };
    let market_avg = market::market_average(dataset, &origin);

    let request = AnalysisRequest {
        category,
        origin,
        volume,
        price,
        exclude_origin: None,
    };

    println!("===== SYSTEM =====");
    println!("{}", prompts::SYSTEM_PROMPT);
    println!("===== USER =====");
    println!("{}", prompts::user_prompt(&request, market_avg));
    Ok(())
}
