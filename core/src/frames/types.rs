use crate::crypto::CipherError;
use crate::types::SlotId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameSpecError {
    /// Token is neither an integer nor a range.
    #[error("invalid frame number {token:?}")]
    InvalidToken { token: String },

    /// `a-b` with a missing or non-numeric side.
    #[error("malformed frame range {token:?}")]
    MalformedRange { token: String },

    /// Range would expand to more slot ids than allowed.
    #[error("frame range {start}-{end} spans {span} frames (max {max})")]
    RangeTooLarge { start: SlotId, end: SlotId, span: u64, max: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum FrameIndexError {
    /// The side channel revealed nothing.
    #[error("no frame index text revealed")]
    Empty,

    /// Neither the text nor its base64 unwrapping opened as an envelope.
    #[error("frame index envelope could not be opened: {0}")]
    Decrypt(#[source] CipherError),

    /// Decrypted text is neither a list literal nor a frame spec.
    #[error("could not parse frame indices from decrypted text {text:?}")]
    Unparseable { text: String },
}
