//! AES-256-CBC encryption with PKCS#7 padding.
//!
//! Each call to `seal` generates a fresh random 16-byte IV and prepends
//! it to the ciphertext.  `open` splits the IV back out before
//! decrypting.
//!
//! Layout of an envelope:
//!   [ 16-byte IV | ciphertext (N x 16 bytes, N >= 1) ]
//!
//! There is no authentication tag.  `open` detects corruption (or a
//! wrong key) only when the padding comes out invalid, which is the
//! usual outcome but not a guaranteed one; a successful `open` is not
//! proof of integrity.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::RngCore;

use crate::crypto::kdf::DerivedKey;
use crate::errors::{EnvsealError, Result};

/// Size of the CBC initialization vector in bytes (one AES block).
pub const IV_LEN: usize = 16;

/// AES block size in bytes. Ciphertext length is always a multiple of this.
pub const BLOCK_LEN: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt `plaintext` under `key`.
///
/// Returns the IV prepended to the ciphertext (IV || ciphertext).
/// Padding always adds at least one byte, so even an empty plaintext
/// produces one full ciphertext block.
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> Vec<u8> {
    // Fresh IV per call. Reusing one would leak which files share a
    // common prefix.
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut output = Vec::with_capacity(IV_LEN + ciphertext.len());
    output.extend_from_slice(&iv);
    output.extend_from_slice(&ciphertext);
    output
}

/// Decrypt an envelope produced by `seal`.
///
/// Expects the first 16 bytes to be the IV, followed by the ciphertext.
pub fn open(key: &DerivedKey, envelope: &[u8]) -> Result<Vec<u8>> {
    if envelope.len() < IV_LEN {
        return Err(EnvsealError::MalformedEnvelope(format!(
            "{} byte(s) is too short to hold a {IV_LEN}-byte IV",
            envelope.len()
        )));
    }

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&envelope[..IV_LEN]);
    let ciphertext = &envelope[IV_LEN..];

    if ciphertext.is_empty() {
        return Err(EnvsealError::MalformedEnvelope(
            "no ciphertext after the IV".into(),
        ));
    }
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(EnvsealError::MalformedEnvelope(format!(
            "ciphertext length {} is not a multiple of the {BLOCK_LEN}-byte block size",
            ciphertext.len()
        )));
    }

    let plaintext = Aes256CbcDec::new(key.as_bytes().into(), (&iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            EnvsealError::MalformedEnvelope(
                "invalid padding (wrong passphrase or corrupted data)".into(),
            )
        })?;

    Ok(plaintext)
}
