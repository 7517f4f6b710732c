//! Colored terminal output helpers.
//!
//! Every command prints through these functions, so per-file results,
//! warnings and hints look the same everywhere.  Status lines go to
//! stdout; errors and warnings go to stderr.

use std::path::PathBuf;

use comfy_table::{ContentArrangement, Table};
use console::style;

/// Green check mark plus message, for completed work.
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Red cross plus message, on stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Yellow warning sign plus message, on stderr.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Blue info sign plus message, for neutral status.
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Dim arrow plus dim message, for follow-up hints.
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of discovered env files (File, State) for `list`.
pub fn print_files_table(files: &[(PathBuf, &'static str)]) {
    if files.is_empty() {
        info("No .env or .env-encrypted files found.");
        tip("Run `envseal encrypt` from a project root that contains .env files.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "State"]);

    for (path, state) in files {
        table.add_row(vec![path.display().to_string(), (*state).to_string()]);
    }

    println!("{table}");
}
