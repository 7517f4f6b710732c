//! `envseal list`: show the env files a run would touch, without
//! touching them.

use std::path::PathBuf;

use crate::cli::{output, Cli};
use crate::errors::Result;
use crate::scan::{self, Mode};

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut files: Vec<(PathBuf, &'static str)> = Vec::new();

    for path in scan::scan(&cli.dir, Mode::Encrypt)? {
        files.push((path, "plaintext"));
    }
    for path in scan::scan(&cli.dir, Mode::Decrypt)? {
        files.push((path, "encrypted"));
    }

    // Scan order is arbitrary; sort for a stable listing.
    files.sort();

    if !files.is_empty() {
        output::info(&format!(
            "{} env file(s) under {}",
            files.len(),
            cli.dir.display()
        ));
    }
    output::print_files_table(&files);

    Ok(())
}
