//! Encrypted side channel for the slot-index list.
//!
//! Sender: `format(indices)` is sealed into an envelope and hidden in a
//! secondary carrier. Receiver: the revealed text is opened and parsed back
//! into ascending, unique slot ids.

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::{debug, trace};

use crate::crypto::{CipherEnvelope, CipherError, CipherService};
use crate::frames::literal::parse_list_literal;
use crate::frames::spec;
use crate::frames::types::FrameIndexError;
use crate::types::SlotId;

pub struct FrameIndexChannel<'a> {
    cipher: &'a CipherService,
}

impl<'a> FrameIndexChannel<'a> {
    pub fn new(cipher: &'a CipherService) -> Self {
        Self { cipher }
    }

    /// Seal the list literal of `indices`.
    pub fn encode(&self, indices: &[SlotId]) -> Result<CipherEnvelope, CipherError> {
        let listing = spec::format(indices);
        trace!(count = indices.len(), "sealing frame index list");
        self.cipher.encrypt(listing.as_bytes())
    }

    /// Open revealed side-channel text and recover the slot ids.
    ///
    /// The text is first opened as an envelope. When its transport encoding
    /// is malformed, the text is read as a second, line-wrapped base64 layer
    /// around the envelope and opened once more. An authentication failure is
    /// returned as is. The plaintext is read as a list literal, then as a
    /// frame spec.
    pub fn decode(&self, revealed_text: &str) -> Result<Vec<SlotId>, FrameIndexError> {
        let text = revealed_text.trim();
        if text.is_empty() {
            return Err(FrameIndexError::Empty);
        }

        let plaintext = self.open_with_unwrap(text)?;
        let recovered = String::from_utf8_lossy(&plaintext);
        let recovered = recovered.trim();

        let mut indices = match parse_list_literal(recovered) {
            Some(list) => list,
            None => spec::parse(recovered).map_err(|e| {
                debug!(error = %e, "frame index text is neither literal nor spec");
                FrameIndexError::Unparseable { text: recovered.to_owned() }
            })?,
        };

        indices.sort_unstable();
        indices.dedup();
        Ok(indices)
    }

    fn open_with_unwrap(&self, text: &str) -> Result<Vec<u8>, FrameIndexError> {
        let first = match self.cipher.decrypt(&CipherEnvelope::new(text)) {
            Ok(plaintext) => return Ok(plaintext),
            Err(e @ CipherError::Malformed(_)) => e,
            Err(e) => return Err(FrameIndexError::Decrypt(e)),
        };

        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let inner = match STANDARD
            .decode(compact.as_bytes())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
        {
            Some(inner) => inner,
            None => return Err(FrameIndexError::Decrypt(first)),
        };

        debug!(error = %first, "retrying frame index with base64-unwrapped text");
        self.cipher
            .decrypt(&CipherEnvelope::new(inner.trim()))
            .map_err(FrameIndexError::Decrypt)
    }
}
