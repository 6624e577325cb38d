//! Domain models for tradeinsight

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the trade dataset.
///
/// Immutable once loaded; the engine only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub date: NaiveDate,
    pub hs_code: String,
    pub product_name: String,
    pub origin: String,
    /// Shipment volume in tons
    pub volume: f64,
    /// Unit price in USD per kg
    pub unit_price: f64,
}

/// Trade direction the user is optimizing for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeMode {
    Import,
    Export,
}

impl TradeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Export => "export",
        }
    }
}

impl std::str::FromStr for TradeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "import" => Ok(Self::Import),
            "export" => Ok(Self::Export),
            _ => Err(format!("Unknown mode: {} (use import or export)", s)),
        }
    }
}

impl std::fmt::Display for TradeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The analysis branch a category resolves to.
///
/// Every category maps to exactly one kind; dispatch in the engine is a
/// total match on this enum, never a substring test on display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Compare the user's unit price against a volume-adjusted fair price
    PriceFairness,
    /// Rank alternative origins cheaper than the current one
    AlternativeSourcing,
    /// Generic informational report
    General,
}

/// Analysis categories offered by the wizard, six per trade mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisCategory {
    // Import mode
    PriceCompetitiveness,
    SourcingDiversification,
    MarketTiming,
    CompetitorIntelligence,
    SupplyChainRisk,
    SpecAnalysis,
    // Export mode
    HighMarginMarkets,
    BlueOcean,
    KeyBuyers,
    ChurnRisk,
    MarketShare,
    GrowthForecast,
}

impl AnalysisCategory {
    /// Stable identifier used on the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceCompetitiveness => "price_competitiveness",
            Self::SourcingDiversification => "sourcing_diversification",
            Self::MarketTiming => "market_timing",
            Self::CompetitorIntelligence => "competitor_intelligence",
            Self::SupplyChainRisk => "supply_chain_risk",
            Self::SpecAnalysis => "spec_analysis",
            Self::HighMarginMarkets => "high_margin_markets",
            Self::BlueOcean => "blue_ocean",
            Self::KeyBuyers => "key_buyers",
            Self::ChurnRisk => "churn_risk",
            Self::MarketShare => "market_share",
            Self::GrowthForecast => "growth_forecast",
        }
    }

    /// Human-readable label shown in the wizard menu
    pub fn label(&self) -> &'static str {
        match self {
            Self::PriceCompetitiveness => "Price Competitiveness",
            Self::SourcingDiversification => "Sourcing Diversification",
            Self::MarketTiming => "Market Timing",
            Self::CompetitorIntelligence => "Competitor Intelligence",
            Self::SupplyChainRisk => "Supply Chain Risk",
            Self::SpecAnalysis => "Spec Analysis",
            Self::HighMarginMarkets => "High-Margin Markets",
            Self::BlueOcean => "Blue Ocean Strategy",
            Self::KeyBuyers => "Key Buyer Identification",
            Self::ChurnRisk => "Churn Risk",
            Self::MarketShare => "Market Share",
            Self::GrowthForecast => "Growth Opportunities",
        }
    }

    /// Total mapping from category to analysis branch
    pub fn kind(&self) -> AnalysisKind {
        match self {
            Self::PriceCompetitiveness => AnalysisKind::PriceFairness,
            Self::SourcingDiversification => AnalysisKind::AlternativeSourcing,
            Self::MarketTiming
            | Self::CompetitorIntelligence
            | Self::SupplyChainRisk
            | Self::SpecAnalysis
            | Self::HighMarginMarkets
            | Self::BlueOcean
            | Self::KeyBuyers
            | Self::ChurnRisk
            | Self::MarketShare
            | Self::GrowthForecast => AnalysisKind::General,
        }
    }

    /// Categories offered for a given trade mode, in menu order
    pub fn for_mode(mode: TradeMode) -> &'static [AnalysisCategory] {
        match mode {
            TradeMode::Import => &[
                Self::PriceCompetitiveness,
                Self::SourcingDiversification,
                Self::MarketTiming,
                Self::CompetitorIntelligence,
                Self::SupplyChainRisk,
                Self::SpecAnalysis,
            ],
            TradeMode::Export => &[
                Self::HighMarginMarkets,
                Self::BlueOcean,
                Self::KeyBuyers,
                Self::ChurnRisk,
                Self::MarketShare,
                Self::GrowthForecast,
            ],
        }
    }

    /// All categories across both modes
    pub fn all() -> Vec<AnalysisCategory> {
        let mut v = Self::for_mode(TradeMode::Import).to_vec();
        v.extend_from_slice(Self::for_mode(TradeMode::Export));
        v
    }
}

impl std::str::FromStr for AnalysisCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('-', "_");
        Self::all()
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| format!("Unknown analysis category: {}", s))
    }
}

impl std::fmt::Display for AnalysisCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_roundtrip() {
        for category in AnalysisCategory::all() {
            assert_eq!(
                AnalysisCategory::from_str(category.as_str()).unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_category_from_str_accepts_dashes() {
        assert_eq!(
            AnalysisCategory::from_str("price-competitiveness").unwrap(),
            AnalysisCategory::PriceCompetitiveness
        );
    }

    #[test]
    fn test_kind_mapping_is_total() {
        // Exactly one category per branch with special handling
        let fairness: Vec<_> = AnalysisCategory::all()
            .into_iter()
            .filter(|c| c.kind() == AnalysisKind::PriceFairness)
            .collect();
        assert_eq!(fairness, vec![AnalysisCategory::PriceCompetitiveness]);

        let sourcing: Vec<_> = AnalysisCategory::all()
            .into_iter()
            .filter(|c| c.kind() == AnalysisKind::AlternativeSourcing)
            .collect();
        assert_eq!(sourcing, vec![AnalysisCategory::SourcingDiversification]);
    }

    #[test]
    fn test_six_categories_per_mode() {
        assert_eq!(AnalysisCategory::for_mode(TradeMode::Import).len(), 6);
        assert_eq!(AnalysisCategory::for_mode(TradeMode::Export).len(), 6);
    }
}
