//! Protocol constants shared by every layer.

/// Length of the hex checksum prefixed to every message.
pub const DIGEST_HEX_LEN: usize = 32;

/// Fragment count used when the caller does not choose one.
pub const DEFAULT_FRAGMENT_COUNT: u32 = 100;

/// Largest number of slot ids a single `a-b` range may expand to.
pub const MAX_RANGE_SPAN: u64 = 1_000_000;

/// Cipher suite identifiers.
pub mod suite_ids {
    pub const AES256_GCM: u16        = 0x0001;
    pub const CHACHA20_POLY1305: u16 = 0x0002;
}

/// Key material baked into the first generation of carriers.
///
/// Every message used the same key and nonce, which voids GCM confidentiality
/// across messages. Kept only so existing carriers stay readable; reach it
/// through `KeyMaterial::legacy_static()`.
pub mod legacy {
    pub const STATIC_KEY: [u8; 32] = *b"12345678901234567890123456789012";
    pub const STATIC_NONCE: [u8; 12] = *b"123456789012";
}
