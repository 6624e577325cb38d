//! Tradeinsight Core Library
//!
//! Shared functionality for the tradeinsight market diagnostic tool:
//! - Trade dataset loading, synthetic generation, and CSV export
//! - Wizard session state machine for the six-step diagnostic flow
//! - Market statistics (global and per-origin averages)
//! - Rule-based insight generator producing structured reports
//! - Prompt assembly for LLM-backed analysis

pub mod dataset;
pub mod error;
pub mod insight;
pub mod market;
pub mod models;
pub mod prompts;
pub mod session;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use insight::{generate, AnalysisRequest, ChartPoint, Report, ReportStatus};
pub use market::MarketBrief;
pub use models::{AnalysisCategory, AnalysisKind, TradeMode, TradeRecord};
pub use session::{Answers, DetailForm, ScopeForm, Session, Step, StepInput};
