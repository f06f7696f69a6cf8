use std::io::Write;

use crate::backend::PdfDocument;
use crate::writer::page_text_or_none;
use crate::{ExtractError, ExtractionSummary};

/// Print the whole document as a page-count line, a `--- TEXT ---` marker,
/// and the page texts, each preceded by a blank-line separator.
///
/// Every page (including the first) is prefixed with `"\n\n"`, so the text
/// block opens with two empty lines. Pages without text contribute an empty
/// string, leaving two consecutive separators at their position.
pub fn write_dump<W: Write + ?Sized>(
    doc: &dyn PdfDocument,
    out: &mut W,
) -> Result<ExtractionSummary, ExtractError> {
    let total_pages = doc.page_count();
    let mut summary = ExtractionSummary {
        total_pages,
        ..Default::default()
    };

    writeln!(out, "PAGES: {}", total_pages)?;
    writeln!(out, "--- TEXT ---")?;

    for index in 0..total_pages {
        out.write_all(b"\n\n")?;
        match page_text_or_none(doc, index) {
            Some(text) => {
                summary.pages_with_text += 1;
                out.write_all(text.as_bytes())?;
            }
            None => summary.pages_without_text += 1,
        }
    }
    writeln!(out)?;

    Ok(summary)
}
