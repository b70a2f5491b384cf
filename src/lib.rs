// src/lib.rs

//! Fact-sheet table normalization engine.
//!
//! Converts heterogeneous tables extracted from parsed fund fact-sheet
//! documents into canonical records across fixed financial categories
//! (maturity, credit rating, issuer/country allocation, portfolio
//! characteristics, performance, sector). Source layouts vary per publisher;
//! the pipeline here — locate table by heading alias, clean each cell,
//! resolve the table orientation, normalize onto the category schema —
//! produces one stable schema per category regardless.
//!
//! The engine is called in-process, once per (instrument, category)
//! request, and performs no network or storage I/O itself; document
//! retrieval and record persistence belong to the callers.

pub mod config;
pub mod document;
pub mod extract;
pub mod pipeline;
pub mod storage;
pub mod utils;

pub use config::ExtractionConfig;
pub use extract::{CanonicalRecord, Category};
pub use pipeline::ExtractionContext;
pub use utils::AppError;
