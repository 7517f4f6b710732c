//! Discovery of `.env` / `.env-encrypted` files in a directory tree.
//!
//! The walk is iterative with an explicit work list, so deeply nested
//! trees cannot overflow the call stack.  Only exact file-name matches
//! count: `.env.local`, `prod.env` and friends are never touched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// File name that marks a plaintext env file.
pub const PLAINTEXT_MARKER: &str = ".env";

/// File name that marks an encrypted env file.
pub const ENCRYPTED_MARKER: &str = ".env-encrypted";

/// Which way a run transforms files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// The exact file name this mode scans for.
    pub fn marker(self) -> &'static str {
        match self {
            Mode::Encrypt => PLAINTEXT_MARKER,
            Mode::Decrypt => ENCRYPTED_MARKER,
        }
    }
}

/// Collect every regular file under `root` whose name matches the
/// mode's marker.
///
/// An unreadable directory (`root` included) aborts the whole scan with
/// the underlying I/O error; a partial result would silently leave
/// files unprocessed.  Result order is unspecified.
pub fn scan(root: &Path, mode: Mode) -> Result<Vec<PathBuf>> {
    let marker = mode.marker();
    let mut matches = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() && entry.file_name() == marker {
                matches.push(entry.path());
            }
        }
    }

    Ok(matches)
}
