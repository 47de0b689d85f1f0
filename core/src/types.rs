use std::io;

use crate::{
    config::ConfigError,
    crypto::CipherError,
    frames::{FrameIndexError, FrameSpecError},
    segmenting::ChunkError,
    slots::{AssignmentError, SlotError},
};

/// Identifier of one addressable slot in the carrier (a frame number).
pub type SlotId = u32;

/// Unified error covering every stage of the message protocol.
/// - `From<T>` impls enable `?` across the pipeline.
/// - A checksum mismatch is deliberately absent: it is reported through
///   `Deframed::verified`, not raised.
#[derive(Debug, thiserror::Error)]
pub enum StegoError {
    /// Ciphertext/tag mismatch on decrypt. Wrong key or tampered fragments.
    #[error("authentication failed: envelope tag does not verify")]
    Authentication,

    /// Transport encoding could not be undone.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// User-supplied or decrypted frame spec is syntactically invalid.
    #[error("invalid frame spec: {0}")]
    InvalidFrameSpec(#[from] FrameSpecError),

    /// Side-channel reveal/decrypt/parse chain exhausted.
    #[error("frame index decode failed: {0}")]
    FrameIndexDecode(#[from] FrameIndexError),

    /// None of the selected slots carried a fragment.
    #[error("no hidden data found in the {slots_read} selected slots")]
    NoDataRevealed { slots_read: usize },

    /// Fragmenting error.
    #[error("chunk error: {0}")]
    Chunk(#[from] ChunkError),

    /// Fragments and slots could not be paired.
    #[error("slot assignment error: {0}")]
    SlotAssignment(#[from] AssignmentError),

    /// External slot storage failed.
    #[error("slot storage error: {0}")]
    Slot(#[from] SlotError),

    /// Cipher construction or seal failure (not authentication).
    #[error("cipher error: {0}")]
    Cipher(CipherError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<CipherError> for StegoError {
    fn from(e: CipherError) -> Self {
        match e {
            CipherError::TagMismatch => StegoError::Authentication,
            CipherError::Malformed(msg) => StegoError::MalformedEnvelope(msg),
            other => StegoError::Cipher(other),
        }
    }
}
