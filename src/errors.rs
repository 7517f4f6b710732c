use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in envseal.
#[derive(Debug, Error)]
pub enum EnvsealError {
    // --- Crypto errors ---
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    // --- File errors ---
    #[error("Path '{0}' does not end with the '-encrypted' suffix")]
    MissingEncryptedSuffix(PathBuf),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("{failed} of {total} file(s) could not be processed")]
    BatchFailed { failed: usize, total: usize },
}

/// Convenience type alias for envseal results.
pub type Result<T> = std::result::Result<T, EnvsealError>;
