use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoilcardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Processing error: {0}")]
    Process(#[from] ProcessError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] crate::pipeline::PipelineError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Error, Debug)]
pub enum ProcessError {
    /// The declared media type is outside the accepted set.
    #[error("Unsupported media type: {0}")]
    UnsupportedType(String),

    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PDF parsing or text recognition failed.
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Failed to preprocess image: {0}")]
    Preprocessing(String),
}

pub type Result<T> = std::result::Result<T, SoilcardError>;
