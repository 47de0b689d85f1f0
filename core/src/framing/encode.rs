use crate::crypto::digest;
use crate::framing::types::FramedPayload;

/// Prefix the checksum of `message` to it.
pub fn frame(message: &[u8]) -> FramedPayload {
    let digest = digest::compute(message);
    FramedPayload::from_parts(digest.as_bytes(), message)
}
