use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::utils::enum_name_or_hex;

/// Stable key and nonce sizes.
pub const KEY_LEN_32: usize = 32;

/// Standard 12-byte nonce length for AES-GCM and ChaCha20-Poly1305.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// AEAD selection. Both suites take 32-byte keys and 12-byte nonces.
#[repr(u16)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum CipherSuite {
    #[default]
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm = 0x0001,
    #[serde(rename = "chacha20-poly1305")]
    ChaCha20Poly1305 = 0x0002,
}

impl CipherSuite {
    /// Resolve a raw suite id, rejecting unknown values.
    pub fn from_id(raw: u16) -> Result<Self, CipherError> {
        CipherSuite::try_from_primitive(raw).map_err(|_| CipherError::UnsupportedSuite { suite_id: raw })
    }

    /// Registry id, mirrored in `constants::suite_ids`.
    pub fn id(self) -> u16 {
        self as u16
    }
}

/// How the AEAD nonce is chosen for each encryption.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NonceMode {
    /// The configured nonce is reused for every message.
    /// Envelope: `base64(ciphertext ++ tag)`.
    #[default]
    Static,
    /// A fresh random nonce per message, carried in front of the ciphertext.
    /// Envelope: `base64(nonce ++ ciphertext ++ tag)`.
    PerMessage,
}

#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    /// Unsupported cipher suite id.
    #[error("unsupported cipher suite: {}", enum_name_or_hex::<CipherSuite>(*suite_id))]
    UnsupportedSuite { suite_id: u16 },

    /// Invalid key length provided to cipher.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// Nonce length mismatch (must be 12 bytes for supported ciphers).
    #[error("invalid nonce length: expected={expected}, actual={actual}")]
    InvalidNonceLen { expected: usize, actual: usize },

    /// AEAD tag mismatch: wrong key, foreign envelope or corrupted data.
    #[error("AEAD tag mismatch")]
    TagMismatch,

    /// The transport encoding could not be undone, or the decoded bytes
    /// are too short to hold a tag.
    #[error("malformed envelope: {0}")]
    Malformed(String),

    /// Seal-side failure reported by the AEAD implementation.
    #[error("crypto failure: {0}")]
    Failure(String),
}
