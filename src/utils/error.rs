// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application.
// ValueParseFailure, AmbiguousLabelMatch and SchemaGap are recovered inside
// the normalizers (zero/null/passthrough + warn) and never surface as errors.

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error reading parsed document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error reading configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse alias mappings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("No heading aliases configured for category '{0}'")]
    MissingAliases(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    // Recovered by the orchestrator as a default record; never fatal.
    #[error("No table found under any heading alias for '{0}'")]
    TableNotFound(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document loading failed: {0}")]
    Document(#[from] DocumentError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
