//! Message checksum.
//!
//! MD5 rendered as 32 lowercase hex characters. This is an integrity check
//! against accidental damage in the carrier, not a security boundary: the
//! AEAD tag is what authenticates the payload.

use std::fmt;

use crate::constants::DIGEST_HEX_LEN;

/// 32-character lowercase hex checksum of a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    /// Accept a digest candidate (e.g. the first 32 bytes of a framed payload).
    ///
    /// Returns `None` unless `raw` is exactly 32 ASCII hex characters.
    /// Uppercase hex is accepted here but can never verify, since `compute`
    /// always emits lowercase.
    pub fn from_candidate(raw: &[u8]) -> Option<Self> {
        if raw.len() != DIGEST_HEX_LEN || !raw.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        // All bytes are ASCII, so this cannot fail.
        std::str::from_utf8(raw).ok().map(|s| Digest(s.to_owned()))
    }

    /// Wrap a prefix this crate wrote itself via `compute`.
    pub(crate) fn from_trusted(raw: &[u8]) -> Self {
        Digest(String::from_utf8_lossy(raw).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the checksum of `message`.
#[inline]
pub fn compute(message: &[u8]) -> Digest {
    Digest(format!("{:x}", md5::compute(message)))
}

/// Recompute the checksum of `body` and compare it to `digest`.
#[inline]
pub fn verify(body: &[u8], digest: &Digest) -> bool {
    compute(body) == *digest
}
