//! Price-fairness analysis
//!
//! Compares the user's unit price against a volume-adjusted market fair
//! price and estimates the annual dollar impact of the gap.

use super::types::{AnalysisRequest, ChartPoint, Report, ReportStatus};

/// Volume (tons) at which the market grants a bulk discount
pub const VOLUME_DISCOUNT_THRESHOLD: f64 = 20.0;

/// Discount factor applied to the market average at or above the threshold
pub const VOLUME_DISCOUNT_FACTOR: f64 = 0.95;

/// Tons × $/kg → dollars per year
const IMPACT_SCALE: f64 = 1000.0;

/// Discount factor for a given annual volume
pub fn discount_factor(volume: f64) -> f64 {
    if volume >= VOLUME_DISCOUNT_THRESHOLD {
        VOLUME_DISCOUNT_FACTOR
    } else {
        1.0
    }
}

/// Market fair price: market average adjusted for the buyer's volume
pub fn fair_price(market_avg: f64, volume: f64) -> f64 {
    market_avg * discount_factor(volume)
}

/// Relative deviation of the buyer's price from the fair price, in percent
pub fn gap_pct(price: f64, fair: f64) -> f64 {
    (price - fair) / fair * 100.0
}

/// Estimated annual dollar impact of buying above fair price
pub fn impact(price: f64, fair: f64, volume: f64) -> i64 {
    ((price - fair) * volume * IMPACT_SCALE).floor() as i64
}

pub(super) fn analyze(market_avg: f64, request: &AnalysisRequest) -> Report {
    let fair = fair_price(market_avg, request.volume);
    let gap = gap_pct(request.price, fair);

    let (status, title, summary, impact, teaser) = if gap > 0.0 {
        (
            ReportStatus::NeedsImprovement,
            "Cost Optimization Needed".to_string(),
            format!(
                "Your purchase price runs {:.1}% above the market fair price (${:.2}). \
                 The current terms are not optimized for your volume tier.",
                gap, fair
            ),
            Some(impact(request.price, fair, request.volume)),
            "Market data secured for 2 alternative supply countries where cost \
             savings are achievable."
                .to_string(),
        )
    } else {
        (
            ReportStatus::Competitive,
            "Highly Competitive".to_string(),
            "You are purchasing within the top 10% of market pricing. A good moment \
             to lock in supply stability at the current terms."
                .to_string(),
            None,
            "A dual-sourcing strategy can spread supply-chain risk while holding \
             your current price level."
                .to_string(),
        )
    };

    Report {
        status,
        title,
        summary,
        impact,
        chart: [
            ChartPoint::new("Market Fair Price", fair),
            ChartPoint::new("Your Purchase Price", request.price),
        ],
        teaser,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisCategory;

    fn request(volume: f64, price: f64) -> AnalysisRequest {
        AnalysisRequest {
            category: AnalysisCategory::PriceCompetitiveness,
            origin: "USA".to_string(),
            volume,
            price,
            exclude_origin: None,
        }
    }

    #[test]
    fn test_discount_factor_threshold() {
        assert_eq!(discount_factor(19.9), 1.0);
        assert_eq!(discount_factor(20.0), 0.95);
        assert_eq!(discount_factor(45.0), 0.95);
        assert_eq!(discount_factor(1.0), 1.0);
    }

    #[test]
    fn test_impact_formula() {
        // fair 6.00, price 6.50, volume 10 → floor(0.5 * 10 * 1000) = 5000
        assert_eq!(impact(6.5, 6.0, 10.0), 5000);
    }

    #[test]
    fn test_positive_gap_needs_improvement() {
        let report = analyze(6.0, &request(10.0, 6.5));
        assert_eq!(report.status, ReportStatus::NeedsImprovement);
        assert_eq!(report.impact, Some(5000));
        assert_eq!(report.chart[0].value, 6.0);
        assert_eq!(report.chart[1].value, 6.5);
    }

    #[test]
    fn test_non_positive_gap_competitive() {
        let report = analyze(6.0, &request(10.0, 5.5));
        assert_eq!(report.status, ReportStatus::Competitive);
        assert!(report.impact.is_none());

        // gap of exactly zero is still competitive
        let report = analyze(6.0, &request(10.0, 6.0));
        assert_eq!(report.status, ReportStatus::Competitive);
    }

    #[test]
    fn test_volume_discount_moves_fair_price() {
        // At 20 tons the fair price drops 5%, so a price at the raw market
        // average becomes a positive gap
        let report = analyze(6.0, &request(20.0, 6.0));
        assert_eq!(report.status, ReportStatus::NeedsImprovement);
        assert_eq!(report.chart[0].value, 6.0 * 0.95);
    }
}
