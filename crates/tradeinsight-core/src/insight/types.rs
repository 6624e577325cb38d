//! Core types for the insight generator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::AnalysisCategory;

/// Outcome classification of a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Terms are at or better than the market fair price
    Competitive,
    /// Terms lag the market fair price
    NeedsImprovement,
    /// A cheaper alternative exists
    Opportunity,
    /// Informational, no positioning verdict
    Info,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Competitive => "competitive",
            Self::NeedsImprovement => "needs_improvement",
            Self::Opportunity => "opportunity",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "competitive" => Ok(Self::Competitive),
            "needs_improvement" => Ok(Self::NeedsImprovement),
            "opportunity" => Ok(Self::Opportunity),
            "info" => Ok(Self::Info),
            _ => Err(format!("Unknown report status: {}", s)),
        }
    }
}

/// One bar of the positioning chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    /// USD per kg
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Input to the insight generator, assembled from a completed wizard session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub category: AnalysisCategory,
    /// Origin country under analysis
    pub origin: String,
    /// Annual volume in tons
    pub volume: f64,
    /// Purchase/quote unit price in USD per kg
    pub price: f64,
    /// Origin to keep out of sourcing comparisons
    pub exclude_origin: Option<String>,
}

/// A generated insight report.
///
/// Every field is always populated; the chart is a fixed two-point series by
/// construction. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub status: ReportStatus,
    pub title: String,
    pub summary: String,
    /// Estimated annual dollar impact, absent when the branch has none
    pub impact: Option<i64>,
    pub chart: [ChartPoint; 2],
    /// Deliberately incomplete follow-up hook
    pub teaser: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ReportStatus::Competitive,
            ReportStatus::NeedsImprovement,
            ReportStatus::Opportunity,
            ReportStatus::Info,
        ] {
            assert_eq!(ReportStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_report_serializes_with_two_chart_points() {
        let report = Report {
            status: ReportStatus::Info,
            title: "t".to_string(),
            summary: "s".to_string(),
            impact: None,
            chart: [ChartPoint::new("a", 1.0), ChartPoint::new("b", 2.0)],
            teaser: "hook".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["chart"].as_array().unwrap().len(), 2);
        assert_eq!(json["status"], "info");
    }
}
