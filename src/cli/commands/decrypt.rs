//! `envseal decrypt`: open every `.env-encrypted` under the chosen
//! directory.

use crate::batch;
use crate::cli::{self, output, Cli};
use crate::crypto::kdf;
use crate::errors::Result;
use crate::scan::{self, Mode, ENCRYPTED_MARKER};

/// Execute the `decrypt` command.
pub fn execute(cli: &Cli) -> Result<()> {
    // 1. Find every envelope below the root.
    let paths = scan::scan(&cli.dir, Mode::Decrypt)?;
    if paths.is_empty() {
        output::info(&format!(
            "No {ENCRYPTED_MARKER} files found under {}",
            cli.dir.display()
        ));
        return Ok(());
    }
    output::info(&format!(
        "Found {} file(s) to decrypt under {}",
        paths.len(),
        cli.dir.display()
    ));

    // 2. The passphrase the envelopes were sealed with.
    let passphrase = cli::prompt_passphrase()?;
    let key = kdf::derive_key(passphrase.as_bytes())?;

    // 3. Fan out, one worker per file, then report.
    let outcomes = batch::process(paths, Mode::Decrypt, &key);
    cli::report_outcomes(&outcomes, Mode::Decrypt)
}
