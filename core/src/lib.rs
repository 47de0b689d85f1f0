//! stegframe-core
//!
//! Message protocol for hiding an authenticated message across the frames
//! of a carrier video: checksum framing, AEAD envelope, fragment
//! splitting and the encrypted frame-index side channel.
//! No media codecs, no prompts, no file paths.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Protocol layers, leaves first
pub mod crypto;
pub mod framing;
pub mod segmenting;
pub mod frames;
pub mod slots;
pub mod telemetry;

// Orchestration
pub mod pipeline;

pub use types::{SlotId, StegoError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::{CipherConfig, KeyMaterial, StegoConfig};
    pub use crate::crypto::{CipherEnvelope, CipherService, CipherSuite, Digest, NonceMode};
    pub use crate::framing::Deframed;
    pub use crate::frames::FrameIndexChannel;
    pub use crate::pipeline::{DecodedMessage, Decoder, EncodeOutcome, Encoder, SlotSelection};
    pub use crate::segmenting::Fragment;
    pub use crate::slots::{IndexCarrier, MemoryIndexCarrier, MemorySlotStore, SlotStore};
    pub use crate::types::{SlotId, StegoError};
}
