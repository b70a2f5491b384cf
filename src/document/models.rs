// src/document/models.rs
use serde::Deserialize;

/// One page of the parsed-document structure produced by the external
/// parsing service. Pages are ordered; each carries an ordered item list.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// One item on a page. The parsing service tags items with a `type` field;
/// everything that is not a heading or a table (text, charts, images) is
/// irrelevant to table extraction and collapses into `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Heading {
        value: String,
    },
    Table {
        /// Ordered rows of ordered cell strings; row 0 is the header row.
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },
    #[serde(other)]
    Other,
}

/// The full parsed document: ordered pages.
pub type ParsedDocument = Vec<Page>;
