//! Per-file encryption and decryption.
//!
//! `encrypt_file` reads a plaintext file and writes its sealed sibling
//! (`.env` -> `.env-encrypted`); `decrypt_file` does the reverse.  The
//! source file is left in place either way, and an existing output file
//! is overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::envelope;
use crate::crypto::kdf::DerivedKey;
use crate::errors::{EnvsealError, Result};

/// Suffix appended to a file's path when it is encrypted.
pub const ENCRYPTED_SUFFIX: &str = "-encrypted";

/// The path the encrypted copy of `path` is written to (`X` -> `X-encrypted`).
pub fn encrypted_path(path: &Path) -> PathBuf {
    let mut out = path.as_os_str().to_os_string();
    out.push(ENCRYPTED_SUFFIX);
    PathBuf::from(out)
}

/// The path the decrypted copy of `path` is written to (`X-encrypted` -> `X`).
///
/// Fails when the file name does not end with the suffix, or when
/// stripping it would leave nothing.
pub fn decrypted_path(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| EnvsealError::MissingEncryptedSuffix(path.to_path_buf()))?;

    let stripped = name
        .strip_suffix(ENCRYPTED_SUFFIX)
        .filter(|rest| !rest.is_empty())
        .ok_or_else(|| EnvsealError::MissingEncryptedSuffix(path.to_path_buf()))?;

    Ok(path.with_file_name(stripped))
}

/// Encrypt one file: read `path`, seal its content, write the envelope
/// to `path` plus the `-encrypted` suffix.  Returns the path written.
pub fn encrypt_file(path: &Path, key: &DerivedKey) -> Result<PathBuf> {
    let plaintext = fs::read(path)?;
    let sealed = envelope::seal(key, &plaintext);

    let output = encrypted_path(path);
    write_atomic(&output, &sealed)?;
    Ok(output)
}

/// Decrypt one file: read the envelope at `path`, open it, write the
/// plaintext to `path` minus the `-encrypted` suffix.  Returns the path
/// written.
pub fn decrypt_file(path: &Path, key: &DerivedKey) -> Result<PathBuf> {
    let output = decrypted_path(path)?;

    let sealed = fs::read(path)?;
    let plaintext = envelope::open(key, &sealed)?;

    write_atomic(&output, &plaintext)?;
    Ok(output)
}

/// Write to a temp file in the same directory, then rename over the
/// target, so readers never see a half-written file.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
