//! Alternative-sourcing analysis
//!
//! Ranks origin countries whose mean unit price undercuts the target
//! origin's market average.

use crate::dataset::Dataset;
use crate::market;

use super::types::{AnalysisRequest, ChartPoint, Report, ReportStatus};

/// Origins strictly cheaper than `market_avg`, alphabetical with their mean
/// prices. The target and any excluded origin are left out.
pub fn cheaper_origins(
    dataset: &Dataset,
    target: &str,
    exclude: Option<&str>,
    market_avg: f64,
) -> Vec<(String, f64)> {
    market::origin_mean_prices(dataset)
        .into_iter()
        .filter(|(origin, mean)| {
            origin != target && Some(origin.as_str()) != exclude && *mean < market_avg
        })
        .collect()
}

pub(super) fn analyze(dataset: &Dataset, market_avg: f64, request: &AnalysisRequest) -> Report {
    let cheaper = cheaper_origins(
        dataset,
        &request.origin,
        request.exclude_origin.as_deref(),
        market_avg,
    );

    // With no cheaper origin the alternative bar collapses onto the target's
    // own average
    let alternative_avg = if cheaper.is_empty() {
        market_avg
    } else {
        cheaper.iter().map(|(_, mean)| mean).sum::<f64>() / cheaper.len() as f64
    };

    let teaser = match cheaper.first() {
        Some((origin, _)) => format!(
            "A vetted list of top-tier suppliers in {} is ready for review.",
            origin
        ),
        None => "A vetted list of top-tier suppliers in an emerging origin is ready \
                 for review."
            .to_string(),
    };

    Report {
        status: ReportStatus::Opportunity,
        title: "Sourcing Diversification Opportunity".to_string(),
        summary: format!(
            "{} origin(s) with stronger price competitiveness than {} were \
             identified. Consider a strategic sourcing shift.",
            cheaper.len(),
            request.origin
        ),
        impact: None,
        chart: [
            ChartPoint::new(request.origin.clone(), market_avg),
            ChartPoint::new("Alternative Origin Avg", alternative_avg),
        ],
        teaser,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisCategory, TradeRecord};
    use chrono::NaiveDate;

    fn record(origin: &str, price: f64) -> TradeRecord {
        TradeRecord {
            date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            hs_code: "0406.10".to_string(),
            product_name: "Mozzarella Block".to_string(),
            origin: origin.to_string(),
            volume: 10.0,
            unit_price: price,
        }
    }

    /// Per-origin means: A = 5, B = 6, C = 7
    fn dataset() -> Dataset {
        Dataset::new(vec![
            record("A", 4.0),
            record("A", 6.0),
            record("B", 6.0),
            record("C", 7.0),
        ])
    }

    fn request(origin: &str, exclude: Option<&str>) -> AnalysisRequest {
        AnalysisRequest {
            category: AnalysisCategory::SourcingDiversification,
            origin: origin.to_string(),
            volume: 10.0,
            price: 6.5,
            exclude_origin: exclude.map(String::from),
        }
    }

    #[test]
    fn test_cheaper_set_and_mean() {
        let dataset = dataset();
        let market_avg = market::market_average(&dataset, "C");
        assert_eq!(market_avg, 7.0);

        let cheaper = cheaper_origins(&dataset, "C", None, market_avg);
        let names: Vec<_> = cheaper.iter().map(|(o, _)| o.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);

        let report = analyze(&dataset, market_avg, &request("C", None));
        assert_eq!(report.status, ReportStatus::Opportunity);
        assert!(report.impact.is_none());
        // mean of {A: 5, B: 6} = 5.5
        assert_eq!(report.chart[1].value, 5.5);
        assert!(report.teaser.contains("A"));
    }

    #[test]
    fn test_excluded_origin_removed_from_candidates() {
        let dataset = dataset();
        let market_avg = market::market_average(&dataset, "C");

        let report = analyze(&dataset, market_avg, &request("C", Some("A")));
        // Only B remains cheaper
        assert_eq!(report.chart[1].value, 6.0);
        assert!(report.summary.contains("1 origin(s)"));
    }

    #[test]
    fn test_no_cheaper_origin_collapses_to_market_avg() {
        let dataset = dataset();
        let market_avg = market::market_average(&dataset, "A");
        assert_eq!(market_avg, 5.0);

        let report = analyze(&dataset, market_avg, &request("A", None));
        assert_eq!(report.chart[0].value, 5.0);
        assert_eq!(report.chart[1].value, 5.0);
        assert!(report.summary.contains("0 origin(s)"));
    }

    #[test]
    fn test_target_not_its_own_alternative() {
        let dataset = dataset();
        // B's market average is 6; A (mean 5) qualifies, B itself never does
        let cheaper = cheaper_origins(&dataset, "B", None, 6.0);
        let names: Vec<_> = cheaper.iter().map(|(o, _)| o.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }
}
