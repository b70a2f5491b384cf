// src/extract/normalize/maturity.rs

use crate::extract::normalize::CanonicalRecord;
use crate::extract::orient::OrientedRecord;

/// Fixed maturity buckets, in output order.
pub const BUCKETS: &[&str] = &[
    "<1 year",
    "1-5 years",
    "5-10 years",
    "10-15 years",
    "15-20 years",
    ">20 years",
];

/// Maps an integer number of years into its bucket. Anything from 20 years
/// up belongs in the open-ended bucket.
fn bucket_for(years: i64) -> &'static str {
    match years {
        i64::MIN..=0 => "<1 year",
        1..=4 => "1-5 years",
        5..=9 => "5-10 years",
        10..=14 => "10-15 years",
        15..=19 => "15-20 years",
        _ => ">20 years",
    }
}

/// Resolves one source label to a bucket, or `None` when no maturity
/// phrasing is recognized.
fn match_label(label: &str) -> Option<&'static str> {
    // Hyphenated range ("10 - 15 Years"): the leading integer decides.
    if label.contains('-') {
        let leading = label.split('-').next().unwrap_or("").trim();
        return leading.parse::<i64>().ok().map(bucket_for);
    }

    let first_token = label
        .to_lowercase()
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string();
    match first_token.as_str() {
        "under" | "<" => Some(bucket_for(0)),
        "over" | ">" | "20+" => Some(bucket_for(20)),
        _ => None,
    }
}

/// Sums each source row into the bucket whose range contains it; several
/// source rows may collapse into one bucket. Labels matching no maturity
/// phrasing become their own passthrough bucket.
pub fn normalize(oriented: &OrientedRecord) -> CanonicalRecord {
    let mut record = CanonicalRecord::new();
    for bucket in BUCKETS {
        record.insert(bucket.to_string(), Some(0.0));
    }

    for (label, cell) in oriented {
        let key = match match_label(label) {
            Some(bucket) => bucket.to_string(),
            None => {
                tracing::warn!("Maturity label '{}' is not represented, please add", label);
                label.clone()
            }
        };
        let entry = record.entry(key).or_insert(Some(0.0));
        *entry = Some(entry.unwrap_or(0.0) + cell.value_or_zero());
    }

    record
}
