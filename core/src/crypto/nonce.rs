//! Nonce selection for the envelope cipher.
//!
//! Two schedules exist:
//! - `Static`: the nonce from `KeyMaterial` is used for every message. Two
//!   messages under the same key and nonce leak the XOR of their plaintexts
//!   and allow GHASH key recovery. This is how the first generation of
//!   carriers was written, so decryption must keep supporting it.
//! - `PerMessage`: 12 random bytes per seal, prefixed to the ciphertext so the
//!   receiver can recover them. Changes the envelope layout.

use rand::RngCore;

use crate::crypto::types::{CipherError, NonceMode, NONCE_LEN_12, TAG_LEN};

/// Pick the nonce for one seal under `mode`.
pub fn nonce_for_seal(mode: NonceMode, configured: &[u8; NONCE_LEN_12]) -> [u8; NONCE_LEN_12] {
    match mode {
        NonceMode::Static => *configured,
        NonceMode::PerMessage => {
            let mut nonce = [0u8; NONCE_LEN_12];
            rand::thread_rng().fill_bytes(&mut nonce);
            nonce
        }
    }
}

/// Split decoded envelope bytes into `(nonce, ciphertext ++ tag)` under `mode`.
pub fn split_for_open<'a>(
    mode: NonceMode,
    configured: &[u8; NONCE_LEN_12],
    raw: &'a [u8],
) -> Result<([u8; NONCE_LEN_12], &'a [u8]), CipherError> {
    match mode {
        NonceMode::Static => Ok((*configured, raw)),
        NonceMode::PerMessage => {
            if raw.len() < NONCE_LEN_12 + TAG_LEN {
                return Err(CipherError::Malformed(format!(
                    "envelope too short for nonce and tag: {} bytes",
                    raw.len()
                )));
            }
            let mut nonce = [0u8; NONCE_LEN_12];
            nonce.copy_from_slice(&raw[..NONCE_LEN_12]);
            Ok((nonce, &raw[NONCE_LEN_12..]))
        }
    }
}

/// Validate requested nonce length.
/// Currently only 12-byte nonces are supported.
#[inline]
pub fn validate_nonce_len(nonce_len: usize) -> Result<(), CipherError> {
    if nonce_len != NONCE_LEN_12 {
        return Err(CipherError::InvalidNonceLen { expected: NONCE_LEN_12, actual: nonce_len });
    }
    Ok(())
}
