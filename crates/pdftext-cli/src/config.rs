use std::path::PathBuf;

/// Input read when neither a CLI argument nor `PDFTEXT_INPUT` is given.
pub const DEFAULT_INPUT: &str = "DOC/CONTRATO.pdf";
/// Output written when neither a CLI argument nor `PDFTEXT_OUTPUT` is given.
pub const DEFAULT_OUTPUT: &str = "pdf-text.txt";

pub const INPUT_ENV: &str = "PDFTEXT_INPUT";
pub const OUTPUT_ENV: &str = "PDFTEXT_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Resolve the input path: CLI flag > env var > default.
pub fn resolve_input(cli: Option<PathBuf>, env: impl Fn(&str) -> Option<String>) -> PathBuf {
    cli.or_else(|| env(INPUT_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

/// Resolve both paths with the same precedence as [`resolve_input`].
pub fn resolve_paths(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Paths {
    let output = output
        .or_else(|| env(OUTPUT_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    Paths {
        input: resolve_input(input, &env),
        output,
    }
}
