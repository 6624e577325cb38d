//! Prompt assembly for LLM-backed analysis
//!
//! Builds the system and user prompts a sourcing-consultant model would
//! receive for a given analysis request. Nothing here talks to a model; the
//! wizard's rule-based generator stands in for one, and the CLI can print
//! the assembled prompt for inspection.

use crate::insight::AnalysisRequest;

/// System prompt: persona and tone rules for the consultant role
pub const SYSTEM_PROMPT: &str = "\
# ROLE (Persona)
You are a Strategic Sourcing Consultant for a Fortune 500 company.
Your goal is to provide objective, data-driven insights that help procurement
managers optimize costs and manage risks.

# TONE & MANNER
- Professional, objective, and constructive.
- Avoid slang, aggressive language, or blame.
- Use business terminology (e.g., \"Cost Optimization\", \"Market Positioning\",
  \"Leverage\").
- Focus on financial impact and strategic opportunities.
";

const THINKING_PROCESS: &str = "\
# THINKING PROCESS
1. Compare the user's price against the market fair price (adjusted for volume).
2. Calculate the price variance (%) and potential annual savings ($).
3. Assess the user's market position (Competitive vs. Needs Improvement).
4. Suggest strategic next steps (e.g., supplier diversification, renegotiation).
";

const KEYWORDS: &str = "\
# KEYWORDS TO USE
- 'Market Variance'
- 'Cost Efficiency'
- 'Strategic Sourcing'
- 'Potential Savings'
";

/// Assemble the user prompt for an analysis request.
///
/// `market_avg` is the target origin's mean unit price in USD/kg.
pub fn user_prompt(request: &AnalysisRequest, market_avg: f64) -> String {
    let context = format!(
        "# CONTEXT\n\
         - Analysis: {}\n\
         - Market Avg: ${:.2}\n\
         - User Price: ${:.2}\n\
         - User Volume: {} tons\n",
        request.category.label(),
        market_avg,
        request.price,
        request.volume,
    );

    format!(
        "{}\n{}\n{}\nOutput JSON.",
        THINKING_PROCESS, KEYWORDS, context
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisCategory;

    #[test]
    fn test_user_prompt_contains_context() {
        let request = AnalysisRequest {
            category: AnalysisCategory::PriceCompetitiveness,
            origin: "USA".to_string(),
            volume: 10.0,
            price: 6.5,
            exclude_origin: None,
        };
        let prompt = user_prompt(&request, 6.0);

        assert!(prompt.contains("Price Competitiveness"));
        assert!(prompt.contains("$6.00"));
        assert!(prompt.contains("$6.50"));
        assert!(prompt.contains("10 tons"));
        assert!(prompt.contains("THINKING PROCESS"));
        assert!(prompt.ends_with("Output JSON."));
    }

    #[test]
    fn test_system_prompt_sets_persona() {
        assert!(SYSTEM_PROMPT.contains("Strategic Sourcing Consultant"));
    }
}
