//! Key provisioning and pipeline configuration.
//!
//! Key material is always handed in explicitly. The library has no default
//! key; the historical static key is reachable only through
//! `KeyMaterial::legacy_static()` so that every use of it is visible.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{legacy, DEFAULT_FRAGMENT_COUNT};
use crate::crypto::{CipherError, CipherService, CipherSuite, NonceMode, KEY_LEN_32, NONCE_LEN_12};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} is not valid hex: {source}")]
    Hex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("{field} must be {expected} bytes, got {actual}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("fragment_count must be at least 1")]
    ZeroFragments,

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// Symmetric key and nonce for the envelope cipher.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    key: [u8; KEY_LEN_32],
    nonce: [u8; NONCE_LEN_12],
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial { .. }")
    }
}

impl KeyMaterial {
    pub fn new(key: [u8; KEY_LEN_32], nonce: [u8; NONCE_LEN_12]) -> Self {
        Self { key, nonce }
    }

    /// Build from slices, checking both lengths.
    pub fn from_slices(key: &[u8], nonce: &[u8]) -> Result<Self, CipherError> {
        let key: [u8; KEY_LEN_32] = key.try_into().map_err(|_| CipherError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        })?;
        let nonce: [u8; NONCE_LEN_12] = nonce.try_into().map_err(|_| CipherError::InvalidNonceLen {
            expected: NONCE_LEN_12,
            actual: nonce.len(),
        })?;
        Ok(Self { key, nonce })
    }

    /// Build from hex strings as they appear in config files.
    pub fn from_hex(key_hex: &str, nonce_hex: &str) -> Result<Self, ConfigError> {
        let key = decode_fixed::<KEY_LEN_32>("key", key_hex)?;
        let nonce = decode_fixed::<NONCE_LEN_12>("nonce", nonce_hex)?;
        Ok(Self { key, nonce })
    }

    /// The fixed key and nonce of the first carrier generation.
    ///
    /// Every message sealed with this material shares one (key, nonce) pair,
    /// so confidentiality does not hold across messages. Use it to read old
    /// carriers, not to write new ones.
    pub fn legacy_static() -> Self {
        Self {
            key: legacy::STATIC_KEY,
            nonce: legacy::STATIC_NONCE,
        }
    }

    pub fn key(&self) -> &[u8; KEY_LEN_32] {
        &self.key
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN_12] {
        &self.nonce
    }
}

fn decode_fixed<const N: usize>(field: &'static str, text: &str) -> Result<[u8; N], ConfigError> {
    let bytes = hex::decode(text.trim()).map_err(|source| ConfigError::Hex { field, source })?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| ConfigError::Length { field, expected: N, actual })
}

/// Serialised cipher settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    #[serde(default)]
    pub suite: CipherSuite,
    pub key_hex: String,
    pub nonce_hex: String,
    #[serde(default)]
    pub nonce_mode: NonceMode,
}

impl CipherConfig {
    pub fn key_material(&self) -> Result<KeyMaterial, ConfigError> {
        KeyMaterial::from_hex(&self.key_hex, &self.nonce_hex)
    }

    pub fn build(&self) -> Result<CipherService, ConfigError> {
        let material = self.key_material()?;
        Ok(CipherService::new(self.suite, &material, self.nonce_mode)?)
    }
}

fn default_fragment_count() -> u32 {
    DEFAULT_FRAGMENT_COUNT
}

/// Top-level settings for one encode/decode deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StegoConfig {
    pub cipher: CipherConfig,
    #[serde(default = "default_fragment_count")]
    pub fragment_count: u32,
}

impl StegoConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: StegoConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded stego config");
        Self::from_json_str(&text)
    }

    /// Check every field without keeping the decoded key around.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fragment_count == 0 {
            return Err(ConfigError::ZeroFragments);
        }
        self.cipher.key_material()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
