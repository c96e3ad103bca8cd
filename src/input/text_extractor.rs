//! Text extraction from supported file formats

use crate::error::{Result, ScreenerError};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    /// Extracts text from every page in order. Pages with no extractable
    /// text contribute nothing; only a wholesale parse failure is an error.
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ScreenerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ScreenerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ScreenerError::Io)?;

        String::from_utf8(bytes).map_err(|e| {
            ScreenerError::Decode(format!(
                "File '{}' is not valid UTF-8: {}",
                path.display(),
                e
            ))
        })
    }
}
