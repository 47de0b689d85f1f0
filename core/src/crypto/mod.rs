pub mod types;
pub mod aead;
pub mod nonce;
pub mod digest;

pub use types::*;
pub use aead::*;
pub use nonce::*;
pub use digest::{Digest};
