//! Wizard session state machine
//!
//! A session is one traversal of the six data-collection steps. State lives
//! in an explicit [`Session`] struct owned by the caller and mutated only
//! through [`Session::submit`]; there is no global state. Transitions are
//! one-directional (step N accepts only its own input kind and advances to
//! N+1); the single backward edge is the explicit restart from the terminal
//! step, which clears all answers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::insight::AnalysisRequest;
use crate::models::{AnalysisCategory, TradeMode};

/// Wizard steps, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// 1. Product scope: HS code, product name, optional target/excluded origin
    Scope,
    /// 2. Display-only market overview
    MarketBrief,
    /// 3. Import or export
    ModeSelect,
    /// 4. Analysis category for the chosen mode
    CategorySelect,
    /// 5. Trade parameters: origin, volume, price
    DetailInput,
    /// 6. Terminal: report rendered, restart available
    Report,
}

impl Step {
    /// One-based position, 1..=6
    pub fn index(&self) -> u8 {
        match self {
            Self::Scope => 1,
            Self::MarketBrief => 2,
            Self::ModeSelect => 3,
            Self::CategorySelect => 4,
            Self::DetailInput => 5,
            Self::Report => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scope => "scope",
            Self::MarketBrief => "market_brief",
            Self::ModeSelect => "mode_select",
            Self::CategorySelect => "category_select",
            Self::DetailInput => "detail_input",
            Self::Report => "report",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Answers collected at the scope step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeForm {
    pub hs_code: String,
    pub product: String,
    /// Defaults to the dataset's most common origin when unset
    pub target_origin: Option<String>,
    /// Origin to keep out of sourcing comparisons
    pub exclude_origin: Option<String>,
}

impl ScopeForm {
    fn validate(&self) -> Result<()> {
        if self.hs_code.trim().is_empty() {
            return Err(Error::InvalidInput("HS code must not be empty".into()));
        }
        if self.product.trim().is_empty() {
            return Err(Error::InvalidInput("Product name must not be empty".into()));
        }
        Ok(())
    }
}

/// Trade parameters collected at the detail step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailForm {
    pub origin: String,
    /// Annual volume in tons
    pub volume: f64,
    /// Purchase/quote unit price in USD per kg
    pub price: f64,
}

impl DetailForm {
    fn validate(&self) -> Result<()> {
        if self.origin.trim().is_empty() {
            return Err(Error::InvalidInput("Origin must not be empty".into()));
        }
        if !self.volume.is_finite() || self.volume <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Volume must be a positive number, got {}",
                self.volume
            )));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Unit price must be a positive number, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

/// Per-step submission events
#[derive(Debug, Clone)]
pub enum StepInput {
    Scope(ScopeForm),
    /// Acknowledge the market brief
    Continue,
    Mode(TradeMode),
    Category(AnalysisCategory),
    Detail(DetailForm),
    /// Loop from the terminal step back to step 1, clearing answers
    Restart,
}

impl StepInput {
    fn kind(&self) -> &'static str {
        match self {
            Self::Scope(_) => "scope form",
            Self::Continue => "continue",
            Self::Mode(_) => "mode selection",
            Self::Category(_) => "category selection",
            Self::Detail(_) => "detail form",
            Self::Restart => "restart",
        }
    }
}

/// Everything the user has answered so far
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Answers {
    pub scope: Option<ScopeForm>,
    pub mode: Option<TradeMode>,
    pub category: Option<AnalysisCategory>,
    pub detail: Option<DetailForm>,
}

/// One wizard traversal
#[derive(Debug, Clone)]
pub struct Session {
    step: Step,
    answers: Answers,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            step: Step::Scope,
            answers: Answers::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Submit the current step's input and advance.
    ///
    /// Validation failures and out-of-step inputs return an error and leave
    /// the session untouched; the caller re-prompts.
    pub fn submit(&mut self, input: StepInput) -> Result<Step> {
        match (self.step, input) {
            (Step::Scope, StepInput::Scope(form)) => {
                form.validate()?;
                self.answers.scope = Some(form);
                self.step = Step::MarketBrief;
            }
            (Step::MarketBrief, StepInput::Continue) => {
                self.step = Step::ModeSelect;
            }
            (Step::ModeSelect, StepInput::Mode(mode)) => {
                self.answers.mode = Some(mode);
                self.step = Step::CategorySelect;
            }
            (Step::CategorySelect, StepInput::Category(category)) => {
                // The menu only shows the current mode's categories; reject
                // anything else submitted programmatically
                let mode = self
                    .answers
                    .mode
                    .ok_or_else(|| Error::Incomplete("mode not selected".into()))?;
                if !AnalysisCategory::for_mode(mode).contains(&category) {
                    return Err(Error::InvalidInput(format!(
                        "Category {} is not available in {} mode",
                        category, mode
                    )));
                }
                self.answers.category = Some(category);
                self.step = Step::DetailInput;
            }
            (Step::DetailInput, StepInput::Detail(form)) => {
                form.validate()?;
                self.answers.detail = Some(form);
                self.step = Step::Report;
            }
            (Step::Report, StepInput::Restart) => {
                *self = Self::new();
            }
            (step, input) => {
                return Err(Error::WrongStep {
                    step,
                    detail: format!("got {}", input.kind()),
                });
            }
        }
        Ok(self.step)
    }

    /// Build the generator input once the traversal is complete.
    ///
    /// Refuses before the terminal step so the generator can never run on a
    /// partial answer set.
    pub fn analysis_request(&self) -> Result<AnalysisRequest> {
        if self.step != Step::Report {
            return Err(Error::Incomplete(format!(
                "wizard is at step {} of 6",
                self.step.index()
            )));
        }
        let category = self
            .answers
            .category
            .ok_or_else(|| Error::Incomplete("category not selected".into()))?;
        let detail = self
            .answers
            .detail
            .as_ref()
            .ok_or_else(|| Error::Incomplete("trade details not entered".into()))?;

        Ok(AnalysisRequest {
            category,
            origin: detail.origin.clone(),
            volume: detail.volume,
            price: detail.price,
            exclude_origin: self
                .answers
                .scope
                .as_ref()
                .and_then(|s| s.exclude_origin.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> ScopeForm {
        ScopeForm {
            hs_code: "0406.10".to_string(),
            product: "Mozzarella Cheese".to_string(),
            target_origin: Some("USA".to_string()),
            exclude_origin: None,
        }
    }

    fn detail() -> DetailForm {
        DetailForm {
            origin: "USA".to_string(),
            volume: 10.0,
            price: 6.5,
        }
    }

    fn completed_session() -> Session {
        let mut session = Session::new();
        session.submit(StepInput::Scope(scope())).unwrap();
        session.submit(StepInput::Continue).unwrap();
        session.submit(StepInput::Mode(TradeMode::Import)).unwrap();
        session
            .submit(StepInput::Category(AnalysisCategory::PriceCompetitiveness))
            .unwrap();
        session.submit(StepInput::Detail(detail())).unwrap();
        session
    }

    #[test]
    fn test_full_traversal_is_strictly_increasing() {
        let mut session = Session::new();
        let mut seen = vec![session.step().index()];

        for input in [
            StepInput::Scope(scope()),
            StepInput::Continue,
            StepInput::Mode(TradeMode::Import),
            StepInput::Category(AnalysisCategory::SourcingDiversification),
            StepInput::Detail(detail()),
        ] {
            seen.push(session.submit(input).unwrap().index());
        }

        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_step_input_is_rejected() {
        let mut session = Session::new();
        let err = session.submit(StepInput::Detail(detail())).unwrap_err();
        assert!(matches!(err, Error::WrongStep { step: Step::Scope, .. }));
        assert_eq!(session.step(), Step::Scope);
    }

    #[test]
    fn test_invalid_scope_blocks_transition() {
        let mut session = Session::new();
        let bad = ScopeForm {
            hs_code: "  ".to_string(),
            ..scope()
        };
        assert!(session.submit(StepInput::Scope(bad)).is_err());
        assert_eq!(session.step(), Step::Scope);
        assert!(session.answers().scope.is_none());
    }

    #[test]
    fn test_invalid_detail_blocks_transition() {
        let mut session = completed_session();
        session.submit(StepInput::Restart).unwrap();
        session.submit(StepInput::Scope(scope())).unwrap();
        session.submit(StepInput::Continue).unwrap();
        session.submit(StepInput::Mode(TradeMode::Import)).unwrap();
        session
            .submit(StepInput::Category(AnalysisCategory::PriceCompetitiveness))
            .unwrap();

        for bad_volume in [0.0, -3.0, f64::NAN] {
            let bad = DetailForm {
                volume: bad_volume,
                ..detail()
            };
            assert!(session.submit(StepInput::Detail(bad)).is_err());
            assert_eq!(session.step(), Step::DetailInput);
        }
    }

    #[test]
    fn test_category_must_match_mode() {
        let mut session = Session::new();
        session.submit(StepInput::Scope(scope())).unwrap();
        session.submit(StepInput::Continue).unwrap();
        session.submit(StepInput::Mode(TradeMode::Export)).unwrap();

        let err = session
            .submit(StepInput::Category(AnalysisCategory::PriceCompetitiveness))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(session.step(), Step::CategorySelect);
    }

    #[test]
    fn test_restart_resets_step_and_answers() {
        let mut session = completed_session();
        assert_eq!(session.step(), Step::Report);

        session.submit(StepInput::Restart).unwrap();
        assert_eq!(session.step(), Step::Scope);
        assert!(session.answers().scope.is_none());
        assert!(session.answers().mode.is_none());
        assert!(session.answers().category.is_none());
        assert!(session.answers().detail.is_none());
    }

    #[test]
    fn test_restart_only_from_terminal_step() {
        let mut session = Session::new();
        session.submit(StepInput::Scope(scope())).unwrap();
        assert!(session.submit(StepInput::Restart).is_err());
        assert_eq!(session.step(), Step::MarketBrief);
    }

    #[test]
    fn test_analysis_request_refused_before_completion() {
        let mut session = Session::new();
        assert!(session.analysis_request().is_err());
        session.submit(StepInput::Scope(scope())).unwrap();
        assert!(session.analysis_request().is_err());
    }

    #[test]
    fn test_analysis_request_after_completion() {
        let session = completed_session();
        let request = session.analysis_request().unwrap();
        assert_eq!(request.category, AnalysisCategory::PriceCompetitiveness);
        assert_eq!(request.origin, "USA");
        assert_eq!(request.volume, 10.0);
        assert_eq!(request.price, 6.5);
    }
}
