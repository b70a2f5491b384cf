// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::normalize::{CanonicalRecord, Category};
use crate::utils::error::StorageError;

/// Persists canonical records to disk, keyed by (instrument ISIN, category).
/// Serialization format is this boundary layer's concern; the normalization
/// core only ever hands over a flat record.
pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    fn record_dir(&self, isin: &str) -> Result<PathBuf, StorageError> {
        // Directory structure: /base_dir/ISIN/
        let target_dir = self.base_dir.join(isin.to_uppercase());
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }

    /// Saves one canonical record as `{base}/{ISIN}/{category}.json`.
    pub fn save_record(
        &self,
        isin: &str,
        category: Category,
        record: &CanonicalRecord,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.record_dir(isin)?.join(format!("{}.json", category.name()));

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved {} record to {}", category, file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the record in JSON format
    pub fn save_record_metadata(
        &self,
        isin: &str,
        category: Category,
        record: &CanonicalRecord,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self
            .record_dir(isin)?
            .join(format!("{}_meta.json", category.name()));

        let fixed = category.fixed_buckets().len();
        let metadata = serde_json::json!({
            "isin": isin.to_uppercase(),
            "category": category.name(),
            "bucket_count": fixed,
            "passthrough_count": record.len().saturating_sub(fixed),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
