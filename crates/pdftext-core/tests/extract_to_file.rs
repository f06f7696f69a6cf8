//! Integration tests for [`extract_to_file`] using the in-memory backend.
//!
//! These cover the file-level behaviour: when the output is created, what
//! happens on a missing input, and that re-runs overwrite in place.

use std::fs;
use std::path::Path;

use pdftext_core::mock::{MockBackend, MockPage};
use pdftext_core::{BackendError, ExtractError, ExtractionSummary, extract_to_file};

const INPUT: &str = "DOC/CONTRATO.pdf";

fn contract_backend() -> MockBackend {
    MockBackend::new().with_document(
        INPUT,
        vec![
            MockPage::text("CONTRATO DE INVESTIMENTO\nCláusula 1\n"),
            MockPage::Empty,
            MockPage::text("Assinaturas\n"),
        ],
    )
}

#[test]
fn writes_all_pages_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pdf-text.txt");

    let summary = extract_to_file(&contract_backend(), Path::new(INPUT), &output).unwrap();

    assert_eq!(
        summary,
        ExtractionSummary {
            total_pages: 3,
            pages_with_text: 2,
            pages_without_text: 1,
        }
    );
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Total Pages: 3\n\
         \n\n========== PAGE 1 ==========\n\nCONTRATO DE INVESTIMENTO\nCláusula 1\n\
         \n\n========== PAGE 2 ==========\n\n[no text extracted]\
         \n\n========== PAGE 3 ==========\n\nAssinaturas\n"
    );
}

#[test]
fn missing_input_does_not_create_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pdf-text.txt");

    let err = extract_to_file(&MockBackend::new(), Path::new(INPUT), &output).unwrap_err();

    assert!(matches!(err, ExtractError::Backend(BackendError::NotFound(_))));
    assert!(!output.exists());
}

#[test]
fn missing_input_leaves_previous_output_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pdf-text.txt");
    fs::write(&output, "previous run").unwrap();

    assert!(extract_to_file(&MockBackend::new(), Path::new(INPUT), &output).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run");
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pdf-text.txt");
    let backend = contract_backend();

    fs::write(&output, "stale content that is longer than nothing at all".repeat(100)).unwrap();
    extract_to_file(&backend, Path::new(INPUT), &output).unwrap();
    let first = fs::read(&output).unwrap();
    extract_to_file(&backend, Path::new(INPUT), &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert!(first.starts_with(b"Total Pages: 3\n"));
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no-such-dir").join("pdf-text.txt");

    let err = extract_to_file(&contract_backend(), Path::new(INPUT), &output).unwrap_err();

    assert!(matches!(err, ExtractError::Io(_)));
}
