// src/extract/normalize/market.rs

use crate::extract::normalize::CanonicalRecord;
use crate::extract::orient::OrientedRecord;

/// First character uppercased, the rest lowercased. Brings shouting issuer
/// labels ("FRANCE (REPUBLIC OF)") into the case the country reference list
/// uses, so substring containment can match.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Re-keys issuer rows to canonical country names by substring containment
/// against the reference list.
///
/// Exactly one match re-keys the row (values for the same country are
/// summed); zero matches keep the original label verbatim as a
/// non-sovereign-issuer key; more than one match is logged and the label is
/// left unresolved rather than guessed. There are no fixed buckets and no
/// built-in suppression of "Total"/"Cash" rows.
pub fn normalize(oriented: &OrientedRecord, countries: &[String]) -> CanonicalRecord {
    let mut record = CanonicalRecord::new();

    for (label, cell) in oriented {
        let capitalized = capitalize(label);
        let matches: Vec<&String> = countries
            .iter()
            .filter(|country| capitalized.contains(country.as_str()))
            .collect();

        let key = match matches.as_slice() {
            [country] => (*country).clone(),
            [] => label.clone(),
            _ => {
                tracing::warn!(
                    "Issue: {} countries found for '{}'; leaving label unresolved",
                    matches.len(),
                    label
                );
                label.clone()
            }
        };

        let entry = record.entry(key).or_insert(Some(0.0));
        *entry = Some(entry.unwrap_or(0.0) + cell.value_or_zero());
    }

    record
}
