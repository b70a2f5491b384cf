// src/document/mod.rs
pub mod models;

use std::fs;
use std::path::Path;

use crate::utils::error::DocumentError;
pub use models::{Item, Page, ParsedDocument};

/// Loads a parsed document from the JSON file the parsing service produced.
///
/// The upstream pipeline saves the service output as `{isin}_factsheet.json`;
/// this is the in-process stand-in for that collaborator. Document retrieval
/// itself (PDF download, parsing-service invocation) is out of scope here.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ParsedDocument, DocumentError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let pages: ParsedDocument = serde_json::from_str(&raw)?;
    tracing::debug!(
        "Loaded parsed document: {} pages from {}",
        pages.len(),
        path.as_ref().display()
    );
    Ok(pages)
}
