//! Insight generator
//!
//! A pure function from (dataset, analysis request) to a [`Report`]. The
//! dispatch is a total match on [`AnalysisKind`]; there is no error path, so
//! a report always comes back fully populated with exactly two chart points.

mod general;
pub mod price_fairness;
pub mod sourcing;
mod types;

pub use types::{AnalysisRequest, ChartPoint, Report, ReportStatus};

use tracing::debug;

use crate::dataset::Dataset;
use crate::market;
use crate::models::AnalysisKind;

/// Generate a report for a completed wizard run.
///
/// The market average is the target origin's mean unit price, falling back
/// to the global mean when the origin has no records (see
/// [`market::market_average`]).
pub fn generate(dataset: &Dataset, request: &AnalysisRequest) -> Report {
    let market_avg = market::market_average(dataset, &request.origin);

    debug!(
        category = request.category.as_str(),
        origin = request.origin.as_str(),
        market_avg,
        "Generating insight report"
    );

    match request.category.kind() {
        AnalysisKind::PriceFairness => price_fairness::analyze(market_avg, request),
        AnalysisKind::AlternativeSourcing => sourcing::analyze(dataset, market_avg, request),
        AnalysisKind::General => general::analyze(market_avg, request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisCategory;

    fn request(category: AnalysisCategory) -> AnalysisRequest {
        AnalysisRequest {
            category,
            origin: "USA".to_string(),
            volume: 10.0,
            price: 6.5,
            exclude_origin: None,
        }
    }

    #[test]
    fn test_every_category_yields_two_chart_points() {
        let dataset = Dataset::synthetic(200, Some(11));
        for category in AnalysisCategory::all() {
            let report = generate(&dataset, &request(category));
            assert_eq!(report.chart.len(), 2, "category {}", category);
            assert!(!report.title.is_empty());
            assert!(!report.summary.is_empty());
            assert!(!report.teaser.is_empty());
        }
    }

    #[test]
    fn test_unknown_origin_falls_back_to_global_average() {
        let dataset = Dataset::synthetic(200, Some(11));
        let global = market::mean_unit_price(dataset.records());

        let mut req = request(AnalysisCategory::MarketTiming);
        req.origin = "Atlantis".to_string();
        let report = generate(&dataset, &req);
        assert_eq!(report.chart[0].value, global);
    }
}
