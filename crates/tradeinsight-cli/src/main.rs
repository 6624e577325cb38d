//! Tradeinsight CLI - Guided trade market diagnostics
//!
//! Usage:
//!   tradeinsight wizard --demo          Run the interactive wizard
//!   tradeinsight dataset generate       Write a synthetic dataset CSV
//!   tradeinsight analyze --category price_competitiveness \
//!       --origin USA --volume 10 --price 6.5
//!   tradeinsight brief                  Show the market overview

mod cli;
mod commands;
mod render;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Wizard { no_delay } => {
            let dataset = commands::load_dataset(&cli.data, cli.demo)?;
            commands::cmd_wizard(&dataset, no_delay)
        }
        Commands::Analyze {
            category,
            origin,
            volume,
            price,
            exclude,
            json,
        } => {
            let dataset = commands::load_dataset(&cli.data, cli.demo)?;
            commands::cmd_analyze(
                &dataset,
                &category,
                origin.as_deref(),
                volume,
                price,
                exclude,
                json,
            )
        }
        Commands::Brief { product } => {
            let dataset = commands::load_dataset(&cli.data, cli.demo)?;
            commands::cmd_brief(&dataset, &product)
        }
        Commands::Categories { mode } => commands::cmd_categories(mode.as_deref()),
        Commands::Dataset { action } => match action {
            DatasetAction::Generate {
                output,
                rows,
                seed,
                force,
            } => commands::cmd_dataset_generate(&output, rows, seed, force),
        },
        Commands::Prompt {
            category,
            origin,
            volume,
            price,
        } => {
            let dataset = commands::load_dataset(&cli.data, cli.demo)?;
            commands::cmd_prompt(&dataset, &category, origin.as_deref(), volume, price)
        }
    }
}
