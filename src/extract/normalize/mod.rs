// src/extract/normalize/mod.rs

pub mod market;
pub mod maturity;
pub mod performance;
pub mod portfolio;
pub mod rating;

use std::fmt;

use indexmap::IndexMap;

use crate::extract::orient::{Orientation, OrientedRecord};

/// Canonical output of one normalization pass: every fixed bucket the
/// category defines, plus zero or more ad-hoc passthrough keys for source
/// labels that matched nothing. Bucketed categories always carry `Some`;
/// identity categories keep `None` for cells that had no numeric value.
pub type CanonicalRecord = IndexMap<String, Option<f64>>;

/// The closed set of financial categories. Adding a category is a
/// compile-time-checked variant: the dispatch in [`normalize`] and the
/// per-variant schema tables below must all be extended together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Category {
    Maturity,
    CreditRate,
    MarketAllocation,
    Sector,
    Portfolio,
    CumulativePerformance,
    YearPerformance,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Maturity,
        Category::CreditRate,
        Category::MarketAllocation,
        Category::Sector,
        Category::Portfolio,
        Category::CumulativePerformance,
        Category::YearPerformance,
    ];

    /// Stable name used in alias configuration, storage keys and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Maturity => "maturity",
            Category::CreditRate => "credit_rate",
            Category::MarketAllocation => "market_allocation",
            Category::Sector => "sector",
            Category::Portfolio => "portfolio",
            Category::CumulativePerformance => "cumulative_performance",
            Category::YearPerformance => "year_performance",
        }
    }

    /// The fixed bucket keys this category's records always contain.
    pub fn fixed_buckets(&self) -> &'static [&'static str] {
        match self {
            Category::Maturity => maturity::BUCKETS,
            Category::CreditRate => rating::BUCKETS,
            Category::Portfolio => portfolio::FIELDS,
            Category::CumulativePerformance => performance::HORIZONS,
            // Passthrough-only categories define no fixed schema.
            Category::MarketAllocation | Category::Sector | Category::YearPerformance => &[],
        }
    }

    /// Row/column layout convention of this category's source tables.
    pub fn orientation(&self) -> Orientation {
        match self {
            Category::CumulativePerformance | Category::YearPerformance => Orientation::Matrix,
            _ => Orientation::Pairs,
        }
    }

    /// Whether the 10-sum fraction-vs-percentage rescale applies. It does
    /// for the percentage-allocation categories only; portfolio fields are
    /// counts and years, performance figures are already percentages.
    pub fn rescales(&self) -> bool {
        matches!(
            self,
            Category::Maturity | Category::CreditRate | Category::MarketAllocation
        )
    }

    /// A record with every fixed bucket zeroed and nothing else; also the
    /// default output when the category's table is missing entirely.
    pub fn default_record(&self) -> CanonicalRecord {
        self.fixed_buckets()
            .iter()
            .map(|b| (b.to_string(), Some(0.0)))
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies the table-wide fraction heuristic in place: if the raw values of
/// a record sum to less than 10, the source gave fractions rather than
/// percentages, and every value is multiplied by 100.
pub fn rescale(record: &mut OrientedRecord) {
    let sum: f64 = record.values().filter_map(|c| c.value).sum();
    if sum < 10.0 {
        tracing::debug!("Value sum {:.4} below 10; rescaling values x100", sum);
        for cell in record.values_mut() {
            if let Some(v) = cell.value.as_mut() {
                *v *= 100.0;
            }
        }
    }
}

/// Maps a cleaned, oriented record onto the category's canonical schema.
pub fn normalize(
    category: Category,
    mut oriented: OrientedRecord,
    countries: &[String],
) -> CanonicalRecord {
    if category.rescales() {
        rescale(&mut oriented);
    }

    match category {
        Category::Maturity => maturity::normalize(&oriented),
        Category::CreditRate => rating::normalize(&oriented),
        Category::MarketAllocation => market::normalize(&oriented, countries),
        Category::Portfolio => portfolio::normalize(&oriented),
        Category::CumulativePerformance => performance::normalize_horizons(&oriented),
        Category::Sector | Category::YearPerformance => performance::passthrough(&oriented),
    }
}

/// Outer-joins two canonical records on their keys, with missing and null
/// values treated as 0. Used to compare the same category across two
/// documents (e.g. maturity breakdowns from two providers).
pub fn merge_records(
    left: &CanonicalRecord,
    right: &CanonicalRecord,
) -> IndexMap<String, (f64, f64)> {
    let mut merged: IndexMap<String, (f64, f64)> = IndexMap::new();
    for (key, value) in left {
        merged.insert(key.clone(), (value.unwrap_or(0.0), 0.0));
    }
    for (key, value) in right {
        merged.entry(key.clone()).or_insert((0.0, 0.0)).1 = value.unwrap_or(0.0);
    }
    merged
}
