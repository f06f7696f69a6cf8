use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the completion line after the output file has been written.
pub fn print_done(w: &mut dyn Write, output: &Path, color: ColorMode) -> std::io::Result<()> {
    let target = output.display().to_string();
    if color.enabled() {
        writeln!(w, "{} Written to {}", "Done!".green().bold(), target.bold())
    } else {
        writeln!(w, "Done! Written to {}", target)
    }
}
