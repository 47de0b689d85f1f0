/// One ordered piece of the envelope text, destined for one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Position in the envelope, starting at 0.
    pub sequence_index: u32,
    pub text: String,
}

impl Fragment {
    pub fn new(sequence_index: u32, text: impl Into<String>) -> Self {
        Self {
            sequence_index,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkError {
    /// Nothing to split.
    #[error("cannot split empty text")]
    EmptyInput,

    /// A fragment count of zero was requested.
    #[error("fragment count must be at least 1")]
    ZeroCount,

    /// Fragments handed to `join_fragments` are not numbered 0..n.
    #[error("fragment sequence gap: expected index {expected}, found {found}")]
    SequenceGap { expected: u32, found: u32 },
}
