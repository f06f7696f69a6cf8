use std::fs::File;
use std::io::Read;
use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pdftext_core::{BackendError, PdfBackend, PdfDocument};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the page writer and its tests do not
/// transitively depend on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

/// Returns true if the file starts with the `%PDF-` header.
///
/// Read failures (e.g. a directory or a permission error) surface as
/// [`BackendError::Io`].
fn has_pdf_magic(path: &Path) -> Result<bool, BackendError> {
    let mut header = Vec::with_capacity(5);
    File::open(path)?.take(5).read_to_end(&mut header)?;
    Ok(header.starts_with(b"%PDF-"))
}

impl PdfBackend for MupdfBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError> {
        if !path.exists() {
            return Err(BackendError::NotFound(path.to_path_buf()));
        }
        if !has_pdf_magic(path)? {
            return Err(BackendError::OpenError(format!(
                "{} is not a PDF (missing %PDF- header)",
                path.display()
            )));
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;
        let page_count = document
            .page_count()
            .map_err(|e| BackendError::OpenError(e.to_string()))?;
        let page_count = usize::try_from(page_count)
            .map_err(|_| BackendError::OpenError(format!("invalid page count {page_count}")))?;

        tracing::debug!(path = %path.display(), page_count, "mupdf document loaded");
        Ok(Box::new(MupdfDocument {
            document,
            page_count,
        }))
    }
}

/// A document opened by [`MupdfBackend`].
pub struct MupdfDocument {
    document: Document,
    page_count: usize,
}

impl PdfDocument for MupdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, BackendError> {
        if index >= self.page_count {
            return Err(BackendError::ExtractionError(format!(
                "page index {} out of range (document has {} pages)",
                index, self.page_count
            )));
        }
        let page_no = i32::try_from(index)
            .map_err(|_| BackendError::ExtractionError(format!("page index {index} too large")))?;

        let page = self
            .document
            .load_page(page_no)
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
        let text_page = page
            .to_text_page(TextPageFlags::empty())
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

        // Block/line iteration, one output line per text line
        let mut page_text = String::new();
        for block in text_page.blocks() {
            for line in block.lines() {
                let line_text: String = line
                    .chars()
                    .map(|c| c.char().unwrap_or('\u{FFFD}'))
                    .collect();
                page_text.push_str(&line_text);
                page_text.push('\n');
            }
        }

        if page_text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(page_text))
        }
    }
}
