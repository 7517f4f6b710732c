//! Passphrase-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! Derivation is deterministic: the same passphrase always yields the
//! same key, which is what lets a later run (or another port of this
//! tool) open envelopes without storing anything next to them.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::errors::{EnvsealError, Result};

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Fixed, public salt. It is not a secret; it only ties the key to this
/// tool's file format. Changing it orphans every existing envelope.
const SALT: &[u8] = b"somesalt";

/// PBKDF2 iteration count. Same compatibility constraint as the salt.
const ITERATIONS: u32 = 4096;

/// Derive a 32-byte AES key from a passphrase.
pub fn derive_key(passphrase: &[u8]) -> Result<DerivedKey> {
    let mut bytes = [0u8; KEY_LEN];
    pbkdf2::<Hmac<Sha256>>(passphrase, SALT, ITERATIONS, &mut bytes)
        .map_err(|e| EnvsealError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;
    Ok(DerivedKey { bytes })
}

/// A wrapper around a 32-byte AES key that automatically zeroes its
/// memory when dropped.
///
/// Cloning is cheap (one array copy); every batch worker thread holds
/// its own clone and wipes it independently.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Create a `DerivedKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
