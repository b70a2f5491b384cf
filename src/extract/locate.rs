// src/extract/locate.rs

use indexmap::IndexMap;

use crate::document::{Item, ParsedDocument};
use crate::utils::error::ExtractError;

/// A raw rectangular table as delivered by the parsing service.
/// Row 0 is the header row.
pub type RawTable = Vec<Vec<String>>;

/// Collects every table in the document, keyed by the heading that
/// immediately precedes it.
///
/// A single top-to-bottom scan tracks the most recently seen heading; each
/// table item is attributed to that heading. When one heading owns several
/// tables (or a heading text repeats with no heading in between), later
/// tables get an internal `"{heading}_{i}"` suffix so duplicates stay
/// addressable. The suffix never matches an alias, so it is invisible to
/// callers of [`find_table`].
pub fn collect_tables(doc: &ParsedDocument) -> IndexMap<String, RawTable> {
    let mut tables: IndexMap<String, RawTable> = IndexMap::new();
    let mut last_heading: Option<String> = None;
    let mut dup_index = 0usize;

    for page in doc {
        for item in &page.items {
            match item {
                Item::Heading { value } => {
                    last_heading = Some(value.clone());
                    dup_index = 0;
                }
                Item::Table { rows } => {
                    let heading = match &last_heading {
                        Some(h) => h.clone(),
                        None => {
                            // Table before any heading: nothing to attribute
                            // it to, so it cannot be located by alias.
                            tracing::debug!("Skipping table with no preceding heading");
                            continue;
                        }
                    };
                    if tables.contains_key(&heading) {
                        tables.insert(format!("{}_{}", heading, dup_index), rows.clone());
                        dup_index += 1;
                    } else {
                        tables.insert(heading, rows.clone());
                    }
                }
                Item::Other => {}
            }
        }
    }

    tables
}

/// Finds the raw table for a canonical field, trying each heading alias in
/// priority order. The first alias that matches a heading seen in the
/// document wins.
pub fn find_table(
    doc: &ParsedDocument,
    field: &str,
    aliases: &[String],
) -> Result<RawTable, ExtractError> {
    let tables = collect_tables(doc);

    for alias in aliases {
        if let Some(table) = tables.get(alias.as_str()) {
            tracing::debug!("Located table for '{}' under heading '{}'", field, alias);
            return Ok(table.clone());
        }
    }

    Err(ExtractError::TableNotFound(field.to_string()))
}
