//! Checksum framing around the plaintext.
//!
//! Responsibilities:
//! - Prefix the 32-char hex checksum to the message (`frame`)
//! - Strip and check it on the way back (`deframe`)
//!
//! Non-responsibilities:
//! - Cryptography
//! - Fragmenting
//! - IO

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{Deframed, FramedPayload};
pub use encode::frame;
pub use decode::deframe;
