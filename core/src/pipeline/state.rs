use std::fmt;

use tracing::debug;

use crate::types::StegoError;

/// `START → CHECKSUM → ENCRYPT → SPLIT → ASSIGN_SLOTS → EMBED →
/// [ENCODE_INDEX_CHANNEL → EMBED_INDEX] → DONE`
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EncoderState {
    Start,
    Checksum,
    Encrypt,
    Split,
    AssignSlots,
    Embed,
    EncodeIndexChannel,
    EmbedIndex,
    Done,
    Failed,
}

impl fmt::Display for EncoderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EncoderState::Start              => "start",
            EncoderState::Checksum           => "checksum",
            EncoderState::Encrypt            => "encrypt",
            EncoderState::Split              => "split",
            EncoderState::AssignSlots        => "assign_slots",
            EncoderState::Embed              => "embed",
            EncoderState::EncodeIndexChannel => "encode_index_channel",
            EncoderState::EmbedIndex         => "embed_index",
            EncoderState::Done               => "done",
            EncoderState::Failed             => "failed",
        };
        f.write_str(name)
    }
}

/// `START → SELECT_SLOTS → REVEAL → JOIN → DECRYPT → VERIFY → DONE`
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DecoderState {
    Start,
    SelectSlots,
    Reveal,
    Join,
    Decrypt,
    Verify,
    Done,
    Failed,
}

impl fmt::Display for DecoderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecoderState::Start       => "start",
            DecoderState::SelectSlots => "select_slots",
            DecoderState::Reveal      => "reveal",
            DecoderState::Join        => "join",
            DecoderState::Decrypt     => "decrypt",
            DecoderState::Verify      => "verify",
            DecoderState::Done        => "done",
            DecoderState::Failed      => "failed",
        };
        f.write_str(name)
    }
}

/// Terminal failure of a pipeline run.
#[derive(Debug, thiserror::Error)]
#[error("{state} stage failed: {source}")]
pub struct PipelineFailure<S>
where
    S: fmt::Debug + fmt::Display,
{
    /// State the machine was in when the error surfaced.
    pub state: S,
    #[source]
    pub source: StegoError,
}

impl<S> PipelineFailure<S>
where
    S: fmt::Debug + fmt::Display,
{
    pub fn error(&self) -> &StegoError {
        &self.source
    }

    pub fn into_error(self) -> StegoError {
        self.source
    }
}

pub type EncodeFailure = PipelineFailure<EncoderState>;
pub type DecodeFailure = PipelineFailure<DecoderState>;

/// Forward-only state tracker shared by encoder and decoder.
pub(crate) struct Machine<S> {
    current: S,
    failed: S,
    label: &'static str,
}

impl<S> Machine<S>
where
    S: Copy + Ord + fmt::Debug + fmt::Display,
{
    pub(crate) fn new(start: S, failed: S, label: &'static str) -> Self {
        Self { current: start, failed, label }
    }

    /// Move to `next`. Transitions never go backwards.
    pub(crate) fn advance(&mut self, next: S) {
        debug_assert!(next > self.current, "{} -> {} is not a forward transition", self.current, next);
        debug!(pipeline = self.label, from = %self.current, to = %next, "state transition");
        self.current = next;
    }

    /// Enter the terminal failed state, keeping the state that failed.
    pub(crate) fn fail(&mut self, error: impl Into<StegoError>) -> PipelineFailure<S> {
        let state = self.current;
        let source = error.into();
        debug!(pipeline = self.label, state = %state, error = %source, "pipeline failed");
        self.current = self.failed;
        PipelineFailure { state, source }
    }
}
