// src/extract/mod.rs
pub mod clean;
pub mod locate;
pub mod normalize;
pub mod orient;

// Re-export key extraction types for convenience
pub use clean::{clean_cell, CleanedCell};
pub use locate::{collect_tables, find_table, RawTable};
pub use normalize::{merge_records, normalize, CanonicalRecord, Category};
pub use orient::{resolve, Orientation, OrientedRecord};
