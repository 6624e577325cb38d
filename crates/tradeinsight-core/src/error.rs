//! Error types for tradeinsight

use std::path::PathBuf;

use thiserror::Error;

use crate::session::Step;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset file not found: {0}")]
    DatasetMissing(PathBuf),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input does not belong to step {step}: {detail}")]
    WrongStep { step: Step, detail: String },

    #[error("Analysis request incomplete: {0}")]
    Incomplete(String),
}

pub type Result<T> = std::result::Result<T, Error>;
