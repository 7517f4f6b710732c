//! Cryptographic primitives for envseal.
//!
//! This module provides:
//! - AES-256-CBC envelope encryption and decryption (`envelope`)
//! - PBKDF2 passphrase-based key derivation (`kdf`)

pub mod envelope;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_key};
pub use envelope::{open, seal};
pub use kdf::{derive_key, DerivedKey};
