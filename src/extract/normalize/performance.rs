// src/extract/normalize/performance.rs

use crate::extract::normalize::CanonicalRecord;
use crate::extract::orient::OrientedRecord;

/// Fixed performance-horizon keys, in output order.
pub const HORIZONS: &[&str] = &["1m", "3m", "6m", "YTD", "1y", "3y", "5y", "Since Inception"];

/// Last two characters of a label, trimmed: the fixed-width horizon code
/// produced by the matrix orientation ("Share Class Cumulative - 1m" -> "1m").
fn horizon_code(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    let start = chars.len().saturating_sub(2);
    chars[start..].iter().collect::<String>().trim().to_string()
}

/// Normalizes a cumulative/annualized performance table.
///
/// Benchmark rows are skipped entirely. Cumulative rows carry the canonical
/// horizons: their code lands in the fixed bucket it names. Annualised rows
/// are kept addressable under an `Annualised <code>` key. Everything else
/// passes through keyed by its original text, so a literal "YTD" row fills
/// that fixed bucket.
pub fn normalize_horizons(oriented: &OrientedRecord) -> CanonicalRecord {
    let mut record = CanonicalRecord::new();
    for horizon in HORIZONS {
        record.insert(horizon.to_string(), Some(0.0));
    }

    for (label, cell) in oriented {
        let lower = label.to_lowercase();
        if lower.contains("benchmark") {
            continue;
        }

        let key = if lower.contains("cumulative") {
            let code = horizon_code(label);
            match HORIZONS.iter().find(|h| h.eq_ignore_ascii_case(&code)) {
                Some(bucket) => bucket.to_string(),
                None => {
                    tracing::warn!(
                        "Horizon code '{}' from label '{}' matches no fixed horizon",
                        code,
                        label
                    );
                    code
                }
            }
        } else if lower.contains("annualised") {
            format!("Annualised {}", horizon_code(label))
        } else if let Some(bucket) = HORIZONS.iter().find(|h| **h == label.as_str()) {
            bucket.to_string()
        } else {
            label.clone()
        };

        record.insert(key, Some(cell.value_or_zero()));
    }

    record
}

/// Identity passthrough for sector breakdown and calendar-year performance:
/// output equals the cleaned, oriented pairs, nulls preserved. Reserved as
/// an extension point for category-specific rules.
pub fn passthrough(oriented: &OrientedRecord) -> CanonicalRecord {
    oriented
        .iter()
        .map(|(label, cell)| (label.clone(), cell.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::clean::clean_cell;
    use approx::assert_relative_eq;

    fn oriented(pairs: &[(&str, &str)]) -> OrientedRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), clean_cell(v)))
            .collect()
    }

    #[test]
    fn test_benchmark_rows_skipped() {
        let record = normalize_horizons(&oriented(&[
            ("Share Class (Cumulative) - 1m", "0.8"),
            ("Benchmark (Cumulative) - 1m", "0.7"),
        ]));
        assert_relative_eq!(record["1m"].unwrap(), 0.8);
    }

    #[test]
    fn test_cumulative_rows_fill_fixed_horizons() {
        let record = normalize_horizons(&oriented(&[
            ("Share Class (Cumulative) - 1m", "0.8"),
            ("Share Class (Cumulative) - 3m", "1.9"),
            ("Share Class (Cumulative) - 1y", "4.2"),
            ("Share Class (Cumulative) - 5y", "12.6"),
        ]));
        assert_eq!(record.len(), HORIZONS.len());
        assert_relative_eq!(record["1m"].unwrap(), 0.8);
        assert_relative_eq!(record["3m"].unwrap(), 1.9);
        assert_relative_eq!(record["1y"].unwrap(), 4.2);
        assert_relative_eq!(record["5y"].unwrap(), 12.6);
        assert_relative_eq!(record["6m"].unwrap(), 0.0);
    }

    #[test]
    fn test_annualised_rows_keyed_separately() {
        let record = normalize_horizons(&oriented(&[
            ("Share Class (Annualised) - 3y", "3.4"),
            ("Share Class (Cumulative) - 3y", "10.5"),
        ]));
        assert_relative_eq!(record["3y"].unwrap(), 10.5);
        assert_relative_eq!(record["Annualised 3y"].unwrap(), 3.4);
    }

    #[test]
    fn test_plain_label_passthrough_fills_literal_bucket() {
        let record = normalize_horizons(&oriented(&[("YTD", "2.1"), ("Launch", "15.0")]));
        assert_relative_eq!(record["YTD"].unwrap(), 2.1);
        assert_relative_eq!(record["Launch"].unwrap(), 15.0);
        assert_eq!(record.len(), HORIZONS.len() + 1);
    }

    #[test]
    fn test_unknown_horizon_code_passes_through() {
        // Fixed-width heuristic on a wider code: last two chars only.
        let record = normalize_horizons(&oriented(&[("Share Class (Cumulative) - YTD", "2.1")]));
        assert!(record.contains_key("TD"));
        assert_relative_eq!(record["YTD"].unwrap(), 0.0);
    }

    #[test]
    fn test_sector_passthrough_preserves_nulls() {
        let record = passthrough(&oriented(&[
            ("Government", "54.2%"),
            ("Corporate", "n/a"),
        ]));
        assert_eq!(record.len(), 2);
        assert_relative_eq!(record["Government"].unwrap(), 54.2);
        assert_eq!(record["Corporate"], None);
    }
}
