//! Analysis category listing command

use anyhow::Result;
use tradeinsight_core::{AnalysisCategory, TradeMode};

pub fn cmd_categories(mode: Option<&str>) -> Result<()> {
    let modes: Vec<TradeMode> = match mode {
        Some(mode) => vec![mode.parse().map_err(|e: String| anyhow::anyhow!(e))?],
        None => vec![TradeMode::Import, TradeMode::Export],
    };

    for mode in modes {
        println!();
        println!("{} categories:", mode);
        for category in AnalysisCategory::for_mode(mode) {
            println!("   {:28} {}", category.as_str(), category.label());
        }
    }
    Ok(())
}
