// ABOUTME: Error types for the analyzer package
// ABOUTME: Defines error variants for session snapshot operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
