//! Market statistics over the trade dataset
//!
//! Read-only aggregates used by the wizard's market-brief step and by the
//! insight analyzers. Per-origin maps are BTreeMaps so iteration order is
//! alphabetical and stable.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::dataset::Dataset;
use crate::models::TradeRecord;

/// Mean unit price over a set of records, 0.0 when empty
pub fn mean_unit_price<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a TradeRecord>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in records {
        sum += record.unit_price;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Mean unit price per origin country
pub fn origin_mean_prices(dataset: &Dataset) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for record in dataset.records() {
        let entry = sums.entry(record.origin.clone()).or_insert((0.0, 0));
        entry.0 += record.unit_price;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(origin, (sum, count))| (origin, sum / count as f64))
        .collect()
}

/// Market average unit price for an origin.
///
/// Falls back to the full-dataset average when no record matches the origin.
/// That masks typos in the origin name, which is why it warns; the analyzers
/// deliberately have no error path.
pub fn market_average(dataset: &Dataset, origin: &str) -> f64 {
    let filtered = dataset.by_origin(origin);
    if filtered.is_empty() {
        warn!(
            origin = origin,
            "No records for origin, falling back to global average"
        );
        mean_unit_price(dataset.records())
    } else {
        mean_unit_price(filtered.into_iter())
    }
}

/// Origin appearing on the most records; ties break alphabetically
pub fn most_common_origin(dataset: &Dataset) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in dataset.records() {
        *counts.entry(record.origin.as_str()).or_insert(0) += 1;
    }
    let mut best: Option<(&str, usize)> = None;
    for (origin, count) in counts {
        // Strict comparison keeps the alphabetically first origin on ties
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((origin, count));
        }
    }
    best.map(|(origin, _)| origin.to_string())
}

/// Origin with the largest total shipped volume; ties break alphabetically
pub fn dominant_origin(dataset: &Dataset) -> Option<String> {
    let mut volumes: BTreeMap<&str, f64> = BTreeMap::new();
    for record in dataset.records() {
        *volumes.entry(record.origin.as_str()).or_insert(0.0) += record.volume;
    }
    let mut best: Option<(&str, f64)> = None;
    for (origin, volume) in volumes {
        if best.map_or(true, |(_, v)| volume > v) {
            best = Some((origin, volume));
        }
    }
    best.map(|(origin, _)| origin.to_string())
}

/// Summary figures for the wizard's market overview step
#[derive(Debug, Clone, Serialize)]
pub struct MarketBrief {
    pub product: String,
    /// Global mean unit price in USD/kg
    pub avg_price: f64,
    /// Origin supplying the largest total volume
    pub dominant_origin: String,
    /// Canned trend tag; the source data carries no time-series signal
    /// strong enough for a real one
    pub trend: &'static str,
}

impl MarketBrief {
    pub fn build(dataset: &Dataset, product: &str) -> Self {
        Self {
            product: product.to_string(),
            avg_price: mean_unit_price(dataset.records()),
            dominant_origin: dominant_origin(dataset).unwrap_or_else(|| "Unknown".to_string()),
            trend: "Rising",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(origin: &str, volume: f64, price: f64) -> TradeRecord {
        TradeRecord {
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            hs_code: "0406.10".to_string(),
            product_name: "Mozzarella Block".to_string(),
            origin: origin.to_string(),
            volume,
            unit_price: price,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            record("USA", 10.0, 5.0),
            record("USA", 20.0, 7.0),
            record("Germany", 40.0, 6.0),
            record("Italy", 5.0, 8.0),
        ])
    }

    #[test]
    fn test_mean_unit_price() {
        let dataset = sample();
        assert_eq!(mean_unit_price(dataset.records()), 6.5);
        assert_eq!(mean_unit_price(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_origin_mean_prices() {
        let means = origin_mean_prices(&sample());
        assert_eq!(means["USA"], 6.0);
        assert_eq!(means["Germany"], 6.0);
        assert_eq!(means["Italy"], 8.0);
    }

    #[test]
    fn test_market_average_filters_by_origin() {
        let dataset = sample();
        assert_eq!(market_average(&dataset, "USA"), 6.0);
    }

    #[test]
    fn test_market_average_falls_back_to_global() {
        let dataset = sample();
        assert_eq!(market_average(&dataset, "Atlantis"), 6.5);
    }

    #[test]
    fn test_most_common_vs_dominant_origin() {
        let dataset = sample();
        // USA has the most rows, Germany the most volume
        assert_eq!(most_common_origin(&dataset).unwrap(), "USA");
        assert_eq!(dominant_origin(&dataset).unwrap(), "Germany");
    }

    #[test]
    fn test_brief() {
        let brief = MarketBrief::build(&sample(), "Mozzarella Cheese");
        assert_eq!(brief.avg_price, 6.5);
        assert_eq!(brief.dominant_origin, "Germany");
    }
}
