//! Standalone market overview command

use anyhow::Result;
use tradeinsight_core::{Dataset, MarketBrief};

use crate::render;

pub fn cmd_brief(dataset: &Dataset, product: &str) -> Result<()> {
    let brief = MarketBrief::build(dataset, product);
    let mut stdout = std::io::stdout();
    render::render_brief(&mut stdout, &brief)?;
    Ok(())
}
