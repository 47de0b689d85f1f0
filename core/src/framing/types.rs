use crate::constants::DIGEST_HEX_LEN;
use crate::crypto::Digest;

/// `digest ++ message`, digest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramedPayload(Vec<u8>);

impl FramedPayload {
    pub(crate) fn from_parts(digest: &[u8], message: &[u8]) -> Self {
        debug_assert_eq!(digest.len(), DIGEST_HEX_LEN);
        let mut out = Vec::with_capacity(digest.len() + message.len());
        out.extend_from_slice(digest);
        out.extend_from_slice(message);
        FramedPayload(out)
    }

    /// The 32-byte digest prefix.
    pub fn digest_bytes(&self) -> &[u8] {
        &self.0[..DIGEST_HEX_LEN]
    }

    /// The digest prefix as a `Digest`.
    pub fn digest(&self) -> Digest {
        Digest::from_trusted(&self.0[..DIGEST_HEX_LEN])
    }

    /// The message after the prefix.
    pub fn message(&self) -> &[u8] {
        &self.0[DIGEST_HEX_LEN..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for FramedPayload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Result of stripping the checksum.
///
/// A failed check is reported through `verified`, never as an error: the
/// body is handed back either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deframed {
    pub verified: bool,
    pub body: Vec<u8>,
}
