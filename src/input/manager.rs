//! Input manager for loading resumes and the job description

use crate::error::{Result, ScreenerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;

/// One candidate's resume, normalized to text.
///
/// `source_name` is the display label derived from the file name; the
/// scoring prompt carries it so the model can fall back to it when the
/// resume body does not state a name.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub source_name: String,
    pub text: String,
}

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Load a resume file and normalize it to UTF-8 text.
    pub async fn load_resume(&self, path: &Path) -> Result<ResumeDocument> {
        let text = self.extract_text(path).await?;
        Ok(ResumeDocument {
            source_name: display_label(path),
            text,
        })
    }

    /// Load the job description, which must be a plain text file.
    pub async fn load_job_description(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        info!("Reading job description: {}", path.display());
        PlainTextExtractor.extract(path).await
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Unknown => Err(ScreenerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ScreenerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Display label for a resume, derived from the file name without extension.
fn display_label(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume")
        .to_string()
}
