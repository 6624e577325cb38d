//! Trade dataset loading, synthetic generation, and CSV export
//!
//! The dataset is a flat list of [`TradeRecord`]s loaded once and queried
//! read-only. A missing file is a typed error, never a silent substitution;
//! callers opt into the synthetic dataset explicitly.

use std::io::{Read, Write};
use std::path::Path;

use chrono::{Duration, NaiveDate};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use rand::distributions::{Distribution, Uniform, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::TradeRecord;

/// Expected CSV header columns, in canonical order
pub const COLUMNS: [&str; 6] = [
    "Date",
    "HS Code",
    "Product Name",
    "Origin Country",
    "Volume",
    "Unit Price",
];

/// Default number of rows in a synthetic dataset
pub const SYNTHETIC_ROWS: usize = 200;

const SYNTHETIC_ORIGINS: [&str; 5] = ["USA", "Germany", "New Zealand", "Denmark", "Italy"];
const SYNTHETIC_WEIGHTS: [f64; 5] = [0.4, 0.2, 0.2, 0.1, 0.1];

/// An immutable collection of trade records
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<TradeRecord>,
}

impl Dataset {
    pub fn new(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load a dataset from a CSV file.
    ///
    /// A missing file returns [`Error::DatasetMissing`] so the caller can
    /// decide whether to fall back to synthetic data; nothing is substituted
    /// here.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetMissing(path.to_path_buf()));
        }
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        debug!(path = %path.display(), rows = dataset.len(), "Dataset loaded");
        Ok(dataset)
    }

    /// Parse CSV data with the canonical trade columns.
    ///
    /// Columns are located by header name, so extra columns and reordering
    /// are tolerated.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let idx = column_indexes(&headers)?;

        let mut records = Vec::new();
        for result in rdr.records() {
            let record = result?;
            records.push(parse_record(&record, &idx)?);
        }

        Ok(Self::new(records))
    }

    /// Generate a synthetic placeholder dataset with the canonical schema.
    ///
    /// Daily dates from 2023-01-01, a single HS code, two product variants
    /// split down the middle, weighted origin sampling, integer volumes in
    /// 5..50 tons and uniform prices in $4.50..$7.50.
    pub fn synthetic(rows: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let origin_dist = WeightedIndex::new(SYNTHETIC_WEIGHTS).unwrap();
        let price_dist = Uniform::new(4.5, 7.5);

        let records = (0..rows)
            .map(|i| TradeRecord {
                date: start + Duration::days(i as i64),
                hs_code: "0406.10".to_string(),
                product_name: if i < rows / 2 {
                    "Mozzarella Shredded".to_string()
                } else {
                    "Mozzarella Block".to_string()
                },
                origin: SYNTHETIC_ORIGINS[origin_dist.sample(&mut rng)].to_string(),
                volume: rng.gen_range(5..50) as f64,
                unit_price: price_dist.sample(&mut rng),
            })
            .collect();

        Self::new(records)
    }

    /// Write the dataset as CSV with the canonical header
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(writer);
        wtr.write_record(COLUMNS)?;
        for r in &self.records {
            wtr.write_record([
                r.date.format("%Y-%m-%d").to_string(),
                r.hs_code.clone(),
                r.product_name.clone(),
                r.origin.clone(),
                format_number(r.volume),
                format!("{:.4}", r.unit_price),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Distinct origin countries, sorted alphabetically
    pub fn origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = self.records.iter().map(|r| r.origin.clone()).collect();
        origins.sort();
        origins.dedup();
        origins
    }

    /// Records for one origin country
    pub fn by_origin(&self, origin: &str) -> Vec<&TradeRecord> {
        self.records.iter().filter(|r| r.origin == origin).collect()
    }
}

/// Resolved column positions in a CSV header
struct ColumnIndexes {
    date: usize,
    hs_code: usize,
    product_name: usize,
    origin: usize,
    volume: usize,
    unit_price: usize,
}

fn column_indexes(headers: &StringRecord) -> Result<ColumnIndexes> {
    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::Dataset(format!("Missing column: {}", name)))
    };
    Ok(ColumnIndexes {
        date: find("Date")?,
        hs_code: find("HS Code")?,
        product_name: find("Product Name")?,
        origin: find("Origin Country")?,
        volume: find("Volume")?,
        unit_price: find("Unit Price")?,
    })
}

fn parse_record(record: &StringRecord, idx: &ColumnIndexes) -> Result<TradeRecord> {
    let field = |i: usize, name: &str| -> Result<&str> {
        record
            .get(i)
            .map(str::trim)
            .ok_or_else(|| Error::Dataset(format!("Missing field: {}", name)))
    };

    let date = parse_date(field(idx.date, "Date")?)?;
    let volume = parse_number(field(idx.volume, "Volume")?, "Volume")?;
    let unit_price = parse_number(field(idx.unit_price, "Unit Price")?, "Unit Price")?;

    Ok(TradeRecord {
        date,
        hs_code: field(idx.hs_code, "HS Code")?.to_string(),
        product_name: field(idx.product_name, "Product Name")?.to_string(),
        origin: field(idx.origin, "Origin Country")?.to_string(),
        volume,
        unit_price,
    })
}

/// Parse a date in either ISO or US format
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .map_err(|_| Error::Dataset(format!("Invalid date: {}", s)))
}

fn parse_number(s: &str, name: &str) -> Result<f64> {
    s.replace(',', "")
        .parse::<f64>()
        .map_err(|_| Error::Dataset(format!("Invalid {}: {}", name, s)))
}

/// Drop the trailing ".0" on whole-number volumes
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
