//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tradeinsight - Trade market diagnostics for strategic sourcing
#[derive(Parser)]
#[command(name = "tradeinsight")]
#[command(about = "Guided trade market diagnostics for strategic sourcing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Trade dataset CSV path
    #[arg(long, default_value = "trade_data.csv", global = true)]
    pub data: PathBuf,

    /// Use an in-memory synthetic dataset instead of a file
    ///
    /// A missing dataset file is an error by default; --demo is the explicit
    /// way to run without one.
    #[arg(long, global = true)]
    pub demo: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive six-step diagnostic wizard
    Wizard {
        /// Skip the cosmetic pre-report delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Run one analysis directly, without the wizard
    Analyze {
        /// Analysis category id (see `tradeinsight categories`)
        #[arg(short, long)]
        category: String,

        /// Target origin country (defaults to the dataset's most common)
        #[arg(short, long)]
        origin: Option<String>,

        /// Annual trade volume in tons
        #[arg(long)]
        volume: f64,

        /// Purchase/quote unit price in USD per kg
        #[arg(long)]
        price: f64,

        /// Origin to keep out of sourcing comparisons
        #[arg(long)]
        exclude: Option<String>,

        /// Print the report as JSON instead of rendering it
        #[arg(long)]
        json: bool,
    },

    /// Show the market overview (step 2 of the wizard, standalone)
    Brief {
        /// Product name shown in the heading
        #[arg(long, default_value = "Mozzarella Cheese")]
        product: String,
    },

    /// List analysis categories
    Categories {
        /// Restrict to one trade mode: import or export
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Manage the trade dataset
    Dataset {
        #[command(subcommand)]
        action: DatasetAction,
    },

    /// Print the LLM prompt that an analysis would assemble
    Prompt {
        /// Analysis category id
        #[arg(short, long)]
        category: String,

        /// Target origin country (defaults to the dataset's most common)
        #[arg(short, long)]
        origin: Option<String>,

        /// Annual trade volume in tons
        #[arg(long)]
        volume: f64,

        /// Purchase/quote unit price in USD per kg
        #[arg(long)]
        price: f64,
    },
}

#[derive(Subcommand)]
pub enum DatasetAction {
    /// Write a synthetic dataset CSV
    Generate {
        /// Output path
        #[arg(short, long, default_value = "trade_data.csv")]
        output: PathBuf,

        /// Number of rows
        #[arg(long, default_value = "200")]
        rows: usize,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
