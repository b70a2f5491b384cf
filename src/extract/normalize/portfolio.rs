// src/extract/normalize/portfolio.rs

use crate::extract::normalize::CanonicalRecord;
use crate::extract::orient::OrientedRecord;

/// Fixed portfolio-characteristic keys, in output order.
pub const FIELDS: &[&str] = &[
    "Average Maturity (years)",
    "Effective Duration (years)",
    "Number of Bonds",
    "Yield",
];

/// Assigns portfolio characteristics by case-insensitive substring.
///
/// "maturity" and "duration" only count when the cell's unit contains `y`:
/// a field can mention either word without being year-denominated (e.g. a
/// yield-to-maturity percentage), and the unit gate keeps those out.
/// Unmatched rows pass through as `"<label> (<unit>)"`.
pub fn normalize(oriented: &OrientedRecord) -> CanonicalRecord {
    let mut record = CanonicalRecord::new();
    for field in FIELDS {
        record.insert(field.to_string(), Some(0.0));
    }

    for (label, cell) in oriented {
        let lower = label.to_lowercase();
        let year_unit = cell.unit.contains('y');

        let key = if lower.contains("maturity") && year_unit {
            FIELDS[0].to_string()
        } else if lower.contains("duration") && year_unit {
            FIELDS[1].to_string()
        } else if lower.contains("number") {
            FIELDS[2].to_string()
        } else if lower.contains("yield") {
            FIELDS[3].to_string()
        } else {
            tracing::warn!("Portfolio label '{}' matches no known field", label);
            format!("{} ({})", label, cell.unit)
        };
        record.insert(key, Some(cell.value_or_zero()));
    }

    record
}
