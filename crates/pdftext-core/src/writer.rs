use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::backend::{PdfBackend, PdfDocument};
use crate::{ExtractError, ExtractionSummary, NO_TEXT_PLACEHOLDER};

/// Fetch the text of one page, treating extraction failures as "no text".
///
/// Empty strings are folded into `None` so callers only have one absence case.
pub(crate) fn page_text_or_none(doc: &dyn PdfDocument, index: usize) -> Option<String> {
    match doc.page_text(index) {
        Ok(Some(text)) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(
                page = index + 1,
                error = %e,
                "page extraction failed, using placeholder"
            );
            None
        }
    }
}

/// Write the page-count header and one banner-delimited section per page.
///
/// Output layout:
///
/// ```text
/// Total Pages: <N>
///
///
/// ========== PAGE 1 ==========
///
/// <text of page 1, or "[no text extracted]">
/// ```
///
/// No trailing newline follows the last page body.
pub fn write_pages<W: Write + ?Sized>(
    doc: &dyn PdfDocument,
    out: &mut W,
) -> Result<ExtractionSummary, ExtractError> {
    let total_pages = doc.page_count();
    let mut summary = ExtractionSummary {
        total_pages,
        ..Default::default()
    };

    writeln!(out, "Total Pages: {}", total_pages)?;

    for index in 0..total_pages {
        write!(out, "\n\n========== PAGE {} ==========\n\n", index + 1)?;
        match page_text_or_none(doc, index) {
            Some(text) => {
                tracing::debug!(
                    page = index + 1,
                    chars = text.chars().count(),
                    "page extracted"
                );
                out.write_all(text.as_bytes())?;
                summary.pages_with_text += 1;
            }
            None => {
                tracing::debug!(page = index + 1, "no text extracted");
                out.write_all(NO_TEXT_PLACEHOLDER.as_bytes())?;
                summary.pages_without_text += 1;
            }
        }
    }

    Ok(summary)
}

/// Open `input` through `backend` and write its pages to `output`.
///
/// The document is opened before `output` is created, so an unreadable or
/// invalid input leaves any existing output untouched.
pub fn extract_to_file(
    backend: &dyn PdfBackend,
    input: &Path,
    output: &Path,
) -> Result<ExtractionSummary, ExtractError> {
    let doc = backend.open(input)?;
    tracing::info!(path = %input.display(), pages = doc.page_count(), "opened document");

    let summary = {
        let mut writer = BufWriter::new(File::create(output)?);
        let summary = write_pages(doc.as_ref(), &mut writer)?;
        writer.flush()?;
        summary
    };

    tracing::info!(
        path = %output.display(),
        pages = summary.total_pages,
        empty = summary.pages_without_text,
        "wrote page text"
    );
    Ok(summary)
}
