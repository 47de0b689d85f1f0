use crate::constants::DIGEST_HEX_LEN;
use crate::crypto::digest::{self, Digest};
use crate::framing::types::Deframed;

/// Split a decrypted payload into checksum and body, and check the body.
///
/// - Shorter than the prefix: `verified = false`, body is the whole payload.
/// - Prefix not hex: `verified = false`, body is everything after it.
pub fn deframe(payload: &[u8]) -> Deframed {
    if payload.len() < DIGEST_HEX_LEN {
        return Deframed {
            verified: false,
            body: payload.to_vec(),
        };
    }

    let (prefix, body) = payload.split_at(DIGEST_HEX_LEN);
    let verified = match Digest::from_candidate(prefix) {
        Some(expected) => digest::verify(body, &expected),
        None => false,
    };

    Deframed {
        verified,
        body: body.to_vec(),
    }
}
