//! Fallback informational report for categories without a dedicated analyzer

use super::types::{AnalysisRequest, ChartPoint, Report, ReportStatus};

pub(super) fn analyze(market_avg: f64, request: &AnalysisRequest) -> Report {
    Report {
        status: ReportStatus::Info,
        title: "Analysis Complete".to_string(),
        summary: format!(
            "The {} analysis of your requested data has finished. Review the \
             detailed indicators below.",
            request.category.label()
        ),
        impact: None,
        chart: [
            ChartPoint::new("Market Average", market_avg),
            ChartPoint::new("Your Target", request.price),
        ],
        teaser: "The full analysis report and underlying dataset are available for \
                 download."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisCategory;

    #[test]
    fn test_general_report_shape() {
        let request = AnalysisRequest {
            category: AnalysisCategory::MarketTiming,
            origin: "Denmark".to_string(),
            volume: 12.0,
            price: 6.1,
            exclude_origin: None,
        };
        let report = analyze(5.9, &request);

        assert_eq!(report.status, ReportStatus::Info);
        assert!(report.impact.is_none());
        assert_eq!(report.chart[0].value, 5.9);
        assert_eq!(report.chart[1].value, 6.1);
        assert!(report.summary.contains("Market Timing"));
    }
}
