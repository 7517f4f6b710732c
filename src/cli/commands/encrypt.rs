//! `envseal encrypt`: seal every `.env` under the chosen directory.

use crate::batch;
use crate::cli::{self, gitignore, output, Cli};
use crate::crypto::kdf;
use crate::errors::Result;
use crate::scan::{self, Mode, PLAINTEXT_MARKER};

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, no_gitignore: bool) -> Result<()> {
    // 1. Find every plaintext .env below the root. Scan errors are
    //    fatal before anything is touched.
    let paths = scan::scan(&cli.dir, Mode::Encrypt)?;
    if paths.is_empty() {
        output::info(&format!(
            "No {PLAINTEXT_MARKER} files found under {}",
            cli.dir.display()
        ));
        return Ok(());
    }
    output::info(&format!(
        "Found {} file(s) to encrypt under {}",
        paths.len(),
        cli.dir.display()
    ));

    // 2. One passphrase, confirmed, for the whole run.
    let passphrase = cli::prompt_new_passphrase()?;
    let key = kdf::derive_key(passphrase.as_bytes())?;

    // 3. Fan out, one worker per file.
    let outcomes = batch::process(paths, Mode::Encrypt, &key);

    // 4. Keep the plaintext files out of version control. Runs even if
    //    some files failed: the ones that succeeded are already sealed.
    if !no_gitignore {
        gitignore::ensure_ignored(&cli.dir, PLAINTEXT_MARKER);
    }

    cli::report_outcomes(&outcomes, Mode::Encrypt)?;
    output::tip(
        "Plaintext .env files are left in place; the -encrypted copies are safe to commit.",
    );
    Ok(())
}
