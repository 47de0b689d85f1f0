//! AEAD interface for AES-256-GCM and ChaCha20-Poly1305, plus the envelope
//! cipher built on top of it.
//!
//! Design notes:
//! - Both ciphers use 32-byte keys and 12-byte nonces.
//! - Tag verification must fail closed (no partial plaintext).
//! - The envelope is the text form of `[nonce ++] ciphertext ++ tag` in
//!   standard padded base64, so it can be embedded as a plain string.

use std::fmt;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce as AesNonce};
use base64::{engine::general_purpose::STANDARD, Engine};
use chacha20poly1305::{ChaCha20Poly1305, Nonce as ChaNonce};
use tracing::trace;

use crate::config::KeyMaterial;
use crate::constants::suite_ids;
use crate::crypto::nonce::{nonce_for_seal, split_for_open, validate_nonce_len};
use crate::crypto::types::{CipherError, CipherSuite, NonceMode, KEY_LEN_32, NONCE_LEN_12, TAG_LEN};

/// Unified AEAD cipher implementation selected by suite id.
#[derive(Clone)]
pub enum AeadImpl {
    AesGcm(Aes256Gcm),
    ChaCha(ChaCha20Poly1305),
}

impl AeadImpl {
    /// Construct the AEAD for a raw suite id and a 32-byte key.
    pub fn from_suite_id(suite_id: u16, key: &[u8]) -> Result<Self, CipherError> {
        if key.len() != KEY_LEN_32 {
            return Err(CipherError::InvalidKeyLen {
                expected: KEY_LEN_32,
                actual: key.len(),
            });
        }

        let bad_key = |_| CipherError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        };

        match suite_id {
            x if x == suite_ids::AES256_GCM => {
                Ok(Self::AesGcm(Aes256Gcm::new_from_slice(key).map_err(bad_key)?))
            }
            x if x == suite_ids::CHACHA20_POLY1305 => {
                Ok(Self::ChaCha(ChaCha20Poly1305::new_from_slice(key).map_err(bad_key)?))
            }
            other => Err(CipherError::UnsupportedSuite { suite_id: other }),
        }
    }

    /// AEAD seal (encrypt). Output is `ciphertext ++ tag`.
    ///
    /// Empty plaintext is allowed: the output is then the bare tag.
    pub fn seal(&self, nonce_12: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        validate_nonce_len(nonce_12.len())?;

        match self {
            AeadImpl::AesGcm(cipher) => cipher
                .encrypt(AesNonce::from_slice(nonce_12), plaintext)
                .map_err(|_| CipherError::Failure("AES-GCM seal failed".into())),
            AeadImpl::ChaCha(cipher) => cipher
                .encrypt(ChaNonce::from_slice(nonce_12), plaintext)
                .map_err(|_| CipherError::Failure("ChaCha20-Poly1305 seal failed".into())),
        }
    }

    /// AEAD open (decrypt) `ciphertext ++ tag`.
    pub fn open(&self, nonce_12: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>, CipherError> {
        validate_nonce_len(nonce_12.len())?;

        if ciphertext_and_tag.len() < TAG_LEN {
            return Err(CipherError::Malformed(format!(
                "ciphertext too short for tag: {} bytes",
                ciphertext_and_tag.len()
            )));
        }

        match self {
            AeadImpl::AesGcm(cipher) => cipher
                .decrypt(AesNonce::from_slice(nonce_12), ciphertext_and_tag)
                .map_err(|_| CipherError::TagMismatch),
            AeadImpl::ChaCha(cipher) => cipher
                .decrypt(ChaNonce::from_slice(nonce_12), ciphertext_and_tag)
                .map_err(|_| CipherError::TagMismatch),
        }
    }
}

/// Text transport form of one authenticated-encryption output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CipherEnvelope(String);

impl CipherEnvelope {
    /// Wrap text received from a carrier. Nothing is validated until decrypt.
    pub fn new(text: impl Into<String>) -> Self {
        CipherEnvelope(text.into())
    }

    /// Transport-encode raw `[nonce ++] ciphertext ++ tag` bytes.
    pub fn from_sealed_bytes(raw: &[u8]) -> Self {
        CipherEnvelope(STANDARD.encode(raw))
    }

    /// Undo the transport encoding.
    pub fn to_sealed_bytes(&self) -> Result<Vec<u8>, CipherError> {
        STANDARD
            .decode(self.0.as_bytes())
            .map_err(|e| CipherError::Malformed(format!("invalid base64: {}", e)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CipherEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CipherEnvelope {
    fn from(text: String) -> Self {
        CipherEnvelope(text)
    }
}

/// Envelope cipher: AEAD under caller-provisioned key material.
///
/// Stateless after construction; `&self` methods can be shared across
/// threads freely.
#[derive(Clone)]
pub struct CipherService {
    aead: AeadImpl,
    suite: CipherSuite,
    nonce: [u8; NONCE_LEN_12],
    nonce_mode: NonceMode,
}

impl fmt::Debug for CipherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherService")
            .field("suite", &self.suite)
            .field("nonce_mode", &self.nonce_mode)
            .finish_non_exhaustive()
    }
}

impl CipherService {
    pub fn new(suite: CipherSuite, material: &KeyMaterial, nonce_mode: NonceMode) -> Result<Self, CipherError> {
        let aead = AeadImpl::from_suite_id(suite.id(), material.key())?;
        Ok(Self {
            aead,
            suite,
            nonce: *material.nonce(),
            nonce_mode,
        })
    }

    /// AES-256-GCM with a static nonce: the layout every existing carrier uses.
    pub fn aes_gcm_static(material: &KeyMaterial) -> Result<Self, CipherError> {
        Self::new(CipherSuite::Aes256Gcm, material, NonceMode::Static)
    }

    pub fn suite(&self) -> CipherSuite {
        self.suite
    }

    pub fn nonce_mode(&self) -> NonceMode {
        self.nonce_mode
    }

    /// Seal `plaintext` and transport-encode the result.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<CipherEnvelope, CipherError> {
        let nonce = nonce_for_seal(self.nonce_mode, &self.nonce);
        let sealed = self.aead.seal(&nonce, plaintext)?;

        let raw = match self.nonce_mode {
            NonceMode::Static => sealed,
            NonceMode::PerMessage => {
                let mut out = Vec::with_capacity(NONCE_LEN_12 + sealed.len());
                out.extend_from_slice(&nonce);
                out.extend_from_slice(&sealed);
                out
            }
        };

        trace!(plaintext_len = plaintext.len(), sealed_len = raw.len(), "sealed envelope");
        Ok(CipherEnvelope::from_sealed_bytes(&raw))
    }

    /// Reverse `encrypt`.
    ///
    /// Fails with `CipherError::Malformed` when the transport encoding is
    /// invalid or too short, and `CipherError::TagMismatch` when the tag does
    /// not verify.
    pub fn decrypt(&self, envelope: &CipherEnvelope) -> Result<Vec<u8>, CipherError> {
        let raw = envelope.to_sealed_bytes()?;
        let (nonce, ciphertext_and_tag) = split_for_open(self.nonce_mode, &self.nonce, &raw)?;
        let plaintext = self.aead.open(&nonce, ciphertext_and_tag)?;

        trace!(sealed_len = raw.len(), plaintext_len = plaintext.len(), "opened envelope");
        Ok(plaintext)
    }
}
