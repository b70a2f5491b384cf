// src/extract/clean.rs

use once_cell::sync::Lazy;
use regex::Regex;

// First maximal numeric substring: optional leading minus, digits, optional
// decimal point. Thousands separators are stripped before this runs.
static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("Failed to compile NUMERIC_RE"));

/// One raw cell split into its numeric value and its non-numeric remainder.
///
/// A percent sign lands in `unit` and carries no scaling effect by itself;
/// whether a table holds fractions or percentages is a table-wide decision
/// (see the 10-sum rescale in the normalizers). A unit containing `y` marks
/// a year-denominated field for the portfolio normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedCell {
    pub value: Option<f64>,
    pub unit: String,
}

impl CleanedCell {
    /// Numeric value with parse failures degraded to 0, for bucketed
    /// categories where an unparseable cell must not abort the table.
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

/// Parses one raw cell string into a (value, unit) pair.
///
/// The first maximal numeric substring becomes the value; everything
/// non-numeric becomes the unit (trailing suffix, or the entire string when
/// no number is present at all).
pub fn clean_cell(raw: &str) -> CleanedCell {
    let stripped = raw.replace(',', "");

    match NUMERIC_RE.find(&stripped) {
        Some(m) => {
            // The regex only ever matches a valid float literal.
            let value = m.as_str().parse::<f64>().ok();
            let mut unit = String::with_capacity(stripped.len() - m.len());
            unit.push_str(&stripped[..m.start()]);
            unit.push_str(&stripped[m.end()..]);
            CleanedCell { value, unit: unit.trim().to_string() }
        }
        None => {
            tracing::debug!("No numeric value in cell '{}'", raw);
            CleanedCell { value: None, unit: stripped.trim().to_string() }
        }
    }
}
