//! `envseal completions`: generate shell completion scripts.
//!
//! Usage:
//!   envseal completions bash > ~/.bash_completion.d/envseal
//!   envseal completions zsh
//!   envseal completions fish

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "envseal", &mut io::stdout());
    Ok(())
}
