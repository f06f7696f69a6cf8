use thiserror::Error;

pub mod backend;
pub mod dump;
pub mod mock;
pub mod writer;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend, PdfDocument};
pub use dump::write_dump;
pub use writer::{extract_to_file, write_pages};

/// Body written in place of page text when extraction yields nothing.
pub const NO_TEXT_PLACEHOLDER: &str = "[no text extracted]";

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Page counts gathered while writing a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub total_pages: usize,
    pub pages_with_text: usize,
    pub pages_without_text: usize,
}
