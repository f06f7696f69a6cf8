//! In-memory backend for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::backend::{BackendError, PdfBackend, PdfDocument};

/// A configurable page for [`MockDocument`].
#[derive(Clone, Debug)]
pub enum MockPage {
    /// A page whose text layer yields this string.
    Text(String),
    /// A page with no text layer (e.g. a scanned image).
    Empty,
    /// A page whose extraction fails with this message.
    Fail(String),
}

impl MockPage {
    pub fn text(s: impl Into<String>) -> Self {
        MockPage::Text(s.into())
    }
}

/// A hand-rolled [`PdfDocument`] backed by a list of pages.
#[derive(Clone, Debug, Default)]
pub struct MockDocument {
    pages: Vec<MockPage>,
}

impl MockDocument {
    pub fn new(pages: Vec<MockPage>) -> Self {
        Self { pages }
    }
}

impl PdfDocument for MockDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, BackendError> {
        match self.pages.get(index) {
            Some(MockPage::Text(s)) => Ok(Some(s.clone())),
            Some(MockPage::Empty) => Ok(None),
            Some(MockPage::Fail(msg)) => Err(BackendError::ExtractionError(msg.clone())),
            None => Err(BackendError::ExtractionError(format!(
                "page index {} out of range",
                index
            ))),
        }
    }
}

/// A [`PdfBackend`] that serves [`MockDocument`]s registered by path.
///
/// Opening any other path fails with [`BackendError::NotFound`].
#[derive(Debug, Default)]
pub struct MockBackend {
    documents: HashMap<PathBuf, MockDocument>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document at `path`.
    pub fn with_document(mut self, path: impl Into<PathBuf>, pages: Vec<MockPage>) -> Self {
        self.documents.insert(path.into(), MockDocument::new(pages));
        self
    }
}

impl PdfBackend for MockBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError> {
        self.documents
            .get(path)
            .cloned()
            .map(|doc| Box::new(doc) as Box<dyn PdfDocument>)
            .ok_or_else(|| BackendError::NotFound(path.to_path_buf()))
    }
}
