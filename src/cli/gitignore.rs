//! `.gitignore` patching after an encrypt run.
//!
//! Once the `-encrypted` copies exist, the plaintext `.env` files are
//! the ones that must stay out of version control.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::cli::output;

/// Append `entry` to `<project_dir>/.gitignore` unless some line
/// already equals it.  Creates the file when missing.  Write failures
/// are swallowed: the batch result does not depend on this.
pub fn ensure_ignored(project_dir: &Path, entry: &str) {
    let path = project_dir.join(".gitignore");

    let existing = fs::read_to_string(&path).unwrap_or_default();
    if existing.lines().any(|line| line.trim() == entry) {
        return;
    }

    let mut block = String::new();
    if !existing.is_empty() && !existing.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(entry);
    block.push('\n');

    let appended = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut file| file.write_all(block.as_bytes()));

    if appended.is_ok() {
        output::info(&format!("Added '{entry}' to .gitignore"));
    }
}
