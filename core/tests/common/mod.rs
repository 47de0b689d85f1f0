#![allow(dead_code)]

use stegframe_core::config::KeyMaterial;
use stegframe_core::crypto::{CipherService, CipherSuite, NonceMode};

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Cipher matching the first generation of carriers.
pub fn legacy_cipher() -> CipherService {
    CipherService::aes_gcm_static(&KeyMaterial::legacy_static()).unwrap()
}

pub fn test_material(seed: u8) -> KeyMaterial {
    KeyMaterial::new([seed; 32], [seed.wrapping_add(1); 12])
}

pub fn cipher(suite: CipherSuite, mode: NonceMode) -> CipherService {
    CipherService::new(suite, &test_material(7), mode).unwrap()
}

/// Every suite/nonce-mode combination.
pub fn all_ciphers() -> Vec<CipherService> {
    let mut out = Vec::new();
    for suite in [CipherSuite::Aes256Gcm, CipherSuite::ChaCha20Poly1305] {
        for mode in [NonceMode::Static, NonceMode::PerMessage] {
            out.push(cipher(suite, mode));
        }
    }
    out
}

/// Replace the first character of `text` with a different base64 character.
pub fn corrupt_first_char(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}
