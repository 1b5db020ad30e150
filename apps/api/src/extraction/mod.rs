//! Text extraction — turns an uploaded resume file into plain text.
//!
//! Pluggable via the `TextExtractor` trait; `AppState` carries an
//! `Arc<dyn TextExtractor>`. Extraction never fails outward: every error is
//! folded into an empty text plus a notice the caller can show.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Declared type of an uploaded resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Txt,
}

impl FileKind {
    /// Infers the kind from a file name extension, case-insensitively.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(FileKind::Pdf)
        } else if lower.ends_with(".txt") {
            Some(FileKind::Txt)
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type. Please upload a PDF or TXT file.")]
    UnsupportedFileType,

    #[error("Error extracting text: {0}")]
    Pdf(String),

    #[error("Error extracting text: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Error extracting text: extraction task failed: {0}")]
    Task(String),
}

/// Result of an extraction attempt. `text` is empty whenever `notice` explains a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionOutcome {
    pub text: String,
    pub notice: Option<String>,
}

impl ExtractionOutcome {
    fn from_result(result: Result<String, ExtractionError>) -> Self {
        match result {
            Ok(text) => Self { text, notice: None },
            Err(e) => {
                warn!("Resume extraction failed: {e}");
                Self {
                    text: String::new(),
                    notice: Some(e.to_string()),
                }
            }
        }
    }
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// `kind` is `None` when the upload's type could not be determined.
    async fn extract(&self, bytes: &[u8], kind: Option<FileKind>) -> ExtractionOutcome;
}

/// Default extractor: `pdf-extract` for PDFs, strict UTF-8 for text files.
pub struct DocumentExtractor;

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, bytes: &[u8], kind: Option<FileKind>) -> ExtractionOutcome {
        let result = match kind {
            Some(FileKind::Txt) => decode_text(bytes),
            Some(FileKind::Pdf) => {
                let owned = bytes.to_vec();
                tokio::task::spawn_blocking(move || extract_pdf(&owned))
                    .await
                    .map_err(|e| ExtractionError::Task(e.to_string()))
                    .and_then(|r| r)
            }
            None => Err(ExtractionError::UnsupportedFileType),
        };
        let outcome = ExtractionOutcome::from_result(result);
        debug!(chars = outcome.text.len(), "Resume text extracted");
        outcome
    }
}

pub fn decode_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = String::from_utf8(bytes.to_vec())?;
    Ok(text.trim().to_string())
}

pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(text.trim().to_string())
}
