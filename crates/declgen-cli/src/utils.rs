//! Shared helpers for the CLI.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use tempfile::NamedTempFile;

/// Prints a status line with a colored verb column.
pub fn print_status(status: &str, message: &str) {
    println!("{} {message}", status.green().bold());
}

/// Reports a per-input failure; the batch keeps going.
pub fn print_failure(path: &Path, err: &anyhow::Error) {
    eprintln!("{} {}: {err:#}", "Failed".red().bold(), path.display());
}

/// Prints the batch summary line.
pub fn print_summary(verb: &str, ok: usize, duration: Duration) {
    println!(
        "    {} {ok} file(s) {verb} in {:.2}s",
        "Finished".green().bold(),
        duration.as_secs_f64()
    );
}

/// Writes the full text to a temporary file next to the destination, then
/// moves it into place. A failure never leaves a truncated destination.
pub fn write_atomic(dest: &Path, text: &str) -> Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| "Failed to write generated text")?;
    file.persist(dest)
        .with_context(|| format!("Failed to move output into {}", dest.display()))?;
    Ok(())
}
