use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pdftext_core::{ExtractError, PdfBackend};
use pdftext_mupdf::MupdfBackend;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use output::ColorMode;

/// PDF page text extractor - write a PDF's text to a file, one banner per page
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write every page's text to a file, separated by page banners
    Extract {
        /// Path to the PDF to read (default: DOC/CONTRATO.pdf)
        input: Option<PathBuf>,

        /// Path to the text file to write (default: pdf-text.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the page count and the full text to stdout
    Dump {
        /// Path to the PDF to read (default: DOC/CONTRATO.pdf)
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        None => extract(None, None, false),
        Some(Command::Extract {
            input,
            output,
            no_color,
        }) => extract(input, output, no_color),
        Some(Command::Dump { input }) => dump(input),
    }
}

/// Log to stderr so stdout only carries program output. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn extract(input: Option<PathBuf>, output: Option<PathBuf>, no_color: bool) -> anyhow::Result<()> {
    let paths = config::resolve_paths(input, output, env_var);
    let color = ColorMode(!no_color && std::env::var_os("NO_COLOR").is_none());

    let backend = MupdfBackend::new();
    let summary = pdftext_core::extract_to_file(&backend, &paths.input, &paths.output)
        .map_err(|e| {
            let context = failure_context(&e, &paths);
            anyhow::Error::new(e).context(context)
        })?;
    tracing::info!(
        pages = summary.total_pages,
        with_text = summary.pages_with_text,
        "extraction complete"
    );

    let mut stdout = std::io::stdout().lock();
    output::print_done(&mut stdout, &paths.output, color)?;
    stdout.flush()?;
    Ok(())
}

/// Name the side of the run that failed: opening the PDF or writing the text file.
fn failure_context(err: &ExtractError, paths: &config::Paths) -> String {
    match err {
        ExtractError::Backend(_) => format!("failed to read {}", paths.input.display()),
        ExtractError::Io(_) => format!("failed to write {}", paths.output.display()),
    }
}

fn dump(input: Option<PathBuf>) -> anyhow::Result<()> {
    let input = config::resolve_input(input, env_var);

    let backend = MupdfBackend::new();
    let doc = backend
        .open(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut stdout = std::io::stdout().lock();
    pdftext_core::write_dump(doc.as_ref(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
