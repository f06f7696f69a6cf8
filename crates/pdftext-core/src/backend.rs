use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF reading backends.
///
/// Implementors own the PDF parsing and text reconstruction; the page
/// writer in [`crate::writer`] only sees the page count and per-page text.
pub trait PdfBackend: Send + Sync {
    /// Open a PDF document for reading.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError>;
}

/// An opened PDF document.
pub trait PdfDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the plain text of the page at 0-based `index`.
    ///
    /// Returns `Ok(None)` when the page has no text layer (e.g. a scanned image).
    fn page_text(&self, index: usize) -> Result<Option<String>, BackendError>;
}
