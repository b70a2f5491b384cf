// src/pipeline/mod.rs

use crate::config::ExtractionConfig;
use crate::document::ParsedDocument;
use crate::extract::normalize::{normalize, CanonicalRecord, Category};
use crate::extract::orient::resolve;
use crate::extract::{find_table, OrientedRecord};
use crate::utils::error::{ConfigError, ExtractError};

/// Wires locator, cleaner, resolver and normalizer for one
/// (instrument, category) request. Stateless across calls; the only shared
/// state is the immutable configuration it was constructed with.
pub struct ExtractionContext {
    config: ExtractionConfig,
}

impl ExtractionContext {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extracts the canonical record for one category from a parsed
    /// document.
    ///
    /// A missing table is recovered as the category's default record with a
    /// logged warning, so a batch over all categories continues past any
    /// single gap. Only a configuration gap (no alias list at all for the
    /// category) propagates as an error.
    pub fn extract(
        &self,
        doc: &ParsedDocument,
        category: Category,
    ) -> Result<CanonicalRecord, ConfigError> {
        self.extract_filtered(doc, category, &[])
    }

    /// Like [`extract`](Self::extract), with a caller-supplied pre-filter:
    /// oriented rows whose label contains any of `exclude`
    /// (case-insensitive) are dropped before normalization. This is how
    /// callers opt out of "Total of Portfolio" / "Cash and Derivatives"
    /// style rows; the core itself never suppresses them.
    pub fn extract_filtered(
        &self,
        doc: &ParsedDocument,
        category: Category,
        exclude: &[String],
    ) -> Result<CanonicalRecord, ConfigError> {
        let aliases = self.config.aliases_for(category)?;

        let table = match find_table(doc, category.name(), aliases) {
            Ok(table) => table,
            Err(ExtractError::TableNotFound(field)) => {
                tracing::warn!(
                    "No table found for '{}'; emitting default record",
                    field
                );
                return Ok(category.default_record());
            }
        };

        let mut oriented = resolve(&table, category.orientation());
        if !exclude.is_empty() {
            apply_exclude_filter(&mut oriented, exclude);
        }

        Ok(normalize(category, oriented, self.config.countries()))
    }
}

fn apply_exclude_filter(oriented: &mut OrientedRecord, exclude: &[String]) {
    let patterns: Vec<String> = exclude.iter().map(|e| e.to_lowercase()).collect();
    oriented.retain(|label, _| {
        let lower = label.to_lowercase();
        let keep = !patterns.iter().any(|p| lower.contains(p.as_str()));
        if !keep {
            tracing::debug!("Pre-filter dropped row '{}'", label);
        }
        keep
    });
}
