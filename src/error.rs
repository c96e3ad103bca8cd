//! Error handling for the resume screener application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text decode error: {0}")]
    Decode(String),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ScreenerError::InvalidInput(err.to_string())
    }
}

/// All request-level failures from the generation service collapse into
/// `Inference`: unreachable host, error status, and timeout abort a run
/// identically.
impl From<reqwest::Error> for ScreenerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScreenerError::Inference(format!("request timed out: {}", err))
        } else {
            ScreenerError::Inference(err.to_string())
        }
    }
}
