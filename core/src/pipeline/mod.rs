//! Encoder / decoder orchestration.
//!
//! Both directions are strictly sequential state machines. Every stage
//! consumes the complete output of the previous one; the first failure ends
//! the run in a `PipelineFailure` that names the state it happened in.

pub mod state;
pub mod encoder;
pub mod decoder;

pub use state::{DecodeFailure, DecoderState, EncodeFailure, EncoderState, PipelineFailure};
pub use encoder::{EncodeOutcome, Encoder, SealedMessage};
pub use decoder::{DecodedMessage, Decoder, SlotSelection};
