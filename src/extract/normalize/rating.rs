// src/extract/normalize/rating.rs

use crate::extract::normalize::CanonicalRecord;
use crate::extract::orient::OrientedRecord;

/// Fixed credit-rating buckets, in output order.
pub const BUCKETS: &[&str] = &["AAA", "AA", "A", "BB", "BBB", "Not Rated"];

/// Assigns each source row to its rating bucket: exact label match first,
/// then the label's first whitespace-delimited token ("AA Rated" -> AA).
/// Assignment semantics: a later row for the same bucket overwrites.
pub fn normalize(oriented: &OrientedRecord) -> CanonicalRecord {
    let mut record = CanonicalRecord::new();
    for bucket in BUCKETS {
        record.insert(bucket.to_string(), Some(0.0));
    }

    for (label, cell) in oriented {
        let key = if BUCKETS.contains(&label.as_str()) {
            label.clone()
        } else {
            let first_token = label.split_whitespace().next().unwrap_or("");
            if BUCKETS.contains(&first_token) {
                first_token.to_string()
            } else {
                tracing::warn!("Rating label '{}' matches no bucket in {:?}", label, BUCKETS);
                label.clone()
            }
        };
        record.insert(key, Some(cell.value_or_zero()));
    }

    record
}
