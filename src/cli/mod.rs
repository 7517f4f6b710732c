//! CLI module: Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod gitignore;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::batch::FileOutcome;
use crate::errors::{EnvsealError, Result};
use crate::scan::Mode;

/// Minimum passphrase length accepted for a fresh encryption run.
const MIN_PASSPHRASE_LEN: usize = 8;

/// Environment variable that supplies the passphrase non-interactively.
pub const PASSPHRASE_ENV_VAR: &str = "ENVSEAL_PASSPHRASE";

/// envseal CLI: encrypt the .env files in a project tree.
#[derive(Parser)]
#[command(
    name = "envseal",
    about = "Encrypt and decrypt .env files with a single passphrase",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory tree to scan (default: current directory)
    #[arg(short, long, default_value = ".", global = true, env = "ENVSEAL_DIR")]
    pub dir: PathBuf,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt every .env file under the directory
    Encrypt {
        /// Skip adding .env to .gitignore after encrypting
        #[arg(long)]
        no_gitignore: bool,
    },

    /// Decrypt every .env-encrypted file under the directory
    Decrypt,

    /// Show the .env and .env-encrypted files a run would touch
    List,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the passphrase for decryption, trying in order:
/// 1. `ENVSEAL_PASSPHRASE` env var (CI/CD)
/// 2. Interactive prompt
///
/// No length check here: the files may have been sealed elsewhere, with
/// whatever passphrase they were sealed with.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory
/// on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSPHRASE_ENV_VAR) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter passphrase")
        .interact()
        .map_err(|e| EnvsealError::CommandFailed(format!("passphrase prompt: {e}")))?;

    if pw.is_empty() {
        return Err(EnvsealError::CommandFailed(
            "passphrase cannot be empty".into(),
        ));
    }
    Ok(Zeroizing::new(pw))
}

/// Prompt for the passphrase of a fresh encryption run, with
/// confirmation.  Also respects `ENVSEAL_PASSPHRASE` for scripted/CI
/// usage.  Enforces a minimum passphrase length.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory
/// on drop.
pub fn prompt_new_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSPHRASE_ENV_VAR) {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSPHRASE_LEN {
                return Err(EnvsealError::CommandFailed(format!(
                    "passphrase must be at least {MIN_PASSPHRASE_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let passphrase = dialoguer::Password::new()
            .with_prompt("Choose passphrase")
            .with_confirmation("Confirm passphrase", "Passphrases do not match, try again")
            .interact()
            .map_err(|e| EnvsealError::CommandFailed(format!("passphrase prompt: {e}")))?;

        if passphrase.len() < MIN_PASSPHRASE_LEN {
            output::warning(&format!(
                "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(passphrase));
    }
}

/// Print per-file results and the closing summary for a batch run.
///
/// Returns `BatchFailed` when any file failed, so the process exits
/// non-zero after everything has been reported.
pub fn report_outcomes(outcomes: &[FileOutcome], mode: Mode) -> Result<()> {
    let verb = match mode {
        Mode::Encrypt => "Encrypted",
        Mode::Decrypt => "Decrypted",
    };

    let mut failed = 0usize;
    for outcome in outcomes {
        match &outcome.result {
            Ok(written) => output::success(&format!(
                "{verb} {} -> {}",
                outcome.path.display(),
                written.display()
            )),
            Err(e) => {
                failed += 1;
                output::error(&format!("{}: {e}", outcome.path.display()));
            }
        }
    }

    if failed > 0 {
        return Err(EnvsealError::BatchFailed {
            failed,
            total: outcomes.len(),
        });
    }

    output::success(&format!(
        "{} file(s) {}",
        outcomes.len(),
        verb.to_lowercase()
    ));
    Ok(())
}
