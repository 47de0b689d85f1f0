//! Encode direction: message → checksum frame → envelope → fragments →
//! slots, plus the optional encrypted slot list for the side channel.

use tracing::{debug, info};

use crate::config::StegoConfig;
use crate::constants::DEFAULT_FRAGMENT_COUNT;
use crate::crypto::{CipherEnvelope, CipherService, Digest};
use crate::framing;
use crate::frames::FrameIndexChannel;
use crate::pipeline::state::{EncodeFailure, EncoderState, Machine};
use crate::segmenting::{self, Fragment};
use crate::slots::{IndexCarrier, SlotAssignment, SlotError, SlotStore};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::{SlotId, StegoError};

/// Output of the pure core path: everything up to the fragments.
#[derive(Clone, Debug)]
pub struct SealedMessage {
    pub digest: Digest,
    pub envelope: CipherEnvelope,
    pub fragments: Vec<Fragment>,
}

/// Output of a full encode run against a carrier.
#[derive(Clone, Debug)]
pub struct EncodeOutcome {
    pub digest: Digest,
    pub assignment: SlotAssignment,
    /// Envelope hidden in the index carrier, when one was supplied.
    pub index_envelope: Option<CipherEnvelope>,
    pub telemetry: TelemetrySnapshot,
}

#[derive(Clone, Debug)]
pub struct Encoder {
    cipher: CipherService,
    fragment_count: u32,
}

struct Run {
    machine: Machine<EncoderState>,
    timer: TelemetryTimer,
    counters: TelemetryCounters,
}

impl Run {
    fn new() -> Self {
        Self {
            machine: Machine::new(EncoderState::Start, EncoderState::Failed, "encode"),
            timer: TelemetryTimer::new(),
            counters: TelemetryCounters::default(),
        }
    }
}

impl Encoder {
    /// Encoder splitting into `DEFAULT_FRAGMENT_COUNT` fragments by default.
    pub fn new(cipher: CipherService) -> Self {
        Self {
            cipher,
            fragment_count: DEFAULT_FRAGMENT_COUNT,
        }
    }

    pub fn from_config(config: &StegoConfig) -> Result<Self, StegoError> {
        config.validate()?;
        Ok(Self::new(config.cipher.build()?).with_fragment_count(config.fragment_count))
    }

    /// Override the fragment count used by `seal_default`.
    pub fn with_fragment_count(mut self, count: u32) -> Self {
        self.fragment_count = count;
        self
    }

    pub fn cipher(&self) -> &CipherService {
        &self.cipher
    }

    pub fn fragment_count(&self) -> u32 {
        self.fragment_count
    }

    /// `seal` with the configured fragment count.
    pub fn seal_default(&self, message: &[u8]) -> Result<SealedMessage, EncodeFailure> {
        self.seal(message, self.fragment_count)
    }

    /// Checksum, encrypt and split `message` into `count` fragments, or one
    /// per envelope character when the envelope is shorter than `count`.
    pub fn seal(&self, message: &[u8], count: u32) -> Result<SealedMessage, EncodeFailure> {
        let mut run = Run::new();
        self.seal_in(&mut run, message, count)
    }

    /// Full encode: seal `message` into one fragment per entry of `slots`,
    /// embed the fragments, and optionally hide the encrypted slot list.
    ///
    /// Fragment `i` goes to the `i`-th smallest slot id. An envelope shorter
    /// than `slots` fills only the smallest slots; the hidden slot list names
    /// just those. Used slot ids are checked against the carrier before
    /// anything is written.
    pub fn encode<S>(
        &self,
        message: &[u8],
        slots: &[SlotId],
        store: &mut S,
        index_carrier: Option<&mut dyn IndexCarrier>,
    ) -> Result<EncodeOutcome, EncodeFailure>
    where
        S: SlotStore,
    {
        let mut run = Run::new();

        let count = u32::try_from(slots.len()).unwrap_or(u32::MAX);
        let sealed = self.seal_in(&mut run, message, count)?;

        // ---- ASSIGN_SLOTS ----
        run.machine.advance(EncoderState::AssignSlots);
        let assignment = SlotAssignment::fill(sealed.fragments, slots).map_err(|e| run.machine.fail(e))?;
        let capacity = store.slot_count().map_err(|e| run.machine.fail(e))?;
        if let Some(slot) = assignment.slots().into_iter().find(|&s| s >= capacity) {
            return Err(run.machine.fail(SlotError::OutOfRange { slot, count: capacity }));
        }

        // ---- EMBED ----
        run.machine.advance(EncoderState::Embed);
        for (slot, fragment) in assignment.iter() {
            let embedded = run.timer.time(Stage::Embed, || store.embed(slot, &fragment.text));
            embedded.map_err(|e| run.machine.fail(e))?;
            run.counters.add_slot(true);
            debug!(slot, sequence = fragment.sequence_index, len = fragment.text.len(), "embedded fragment");
        }

        // ---- optional side channel ----
        let index_envelope = match index_carrier {
            Some(carrier) => {
                run.machine.advance(EncoderState::EncodeIndexChannel);
                let channel = FrameIndexChannel::new(&self.cipher);
                let envelope = channel.encode(&assignment.slots()).map_err(|e| run.machine.fail(e))?;

                run.machine.advance(EncoderState::EmbedIndex);
                let hidden = run.timer.time(Stage::EmbedIndex, || carrier.hide(envelope.as_str()));
                hidden.map_err(|e| run.machine.fail(e))?;
                Some(envelope)
            }
            None => None,
        };

        run.machine.advance(EncoderState::Done);
        run.timer.finish();
        info!(
            fragments = assignment.len(),
            envelope_len = sealed.envelope.len(),
            index_channel = index_envelope.is_some(),
            "message encoded"
        );

        Ok(EncodeOutcome {
            digest: sealed.digest,
            assignment,
            index_envelope,
            telemetry: TelemetrySnapshot::from(&run.counters, &run.timer),
        })
    }

    fn seal_in(&self, run: &mut Run, message: &[u8], count: u32) -> Result<SealedMessage, EncodeFailure> {
        // ---- CHECKSUM ----
        run.machine.advance(EncoderState::Checksum);
        let framed = run.timer.time(Stage::Checksum, || framing::frame(message));
        let digest = framed.digest();
        run.counters.add_message(message.len(), framed.len());

        // ---- ENCRYPT ----
        run.machine.advance(EncoderState::Encrypt);
        let envelope = run
            .timer
            .time(Stage::Encrypt, || self.cipher.encrypt(framed.as_bytes()))
            .map_err(|e| run.machine.fail(e))?;
        run.counters.add_envelope(envelope.len());

        // ---- SPLIT ----
        run.machine.advance(EncoderState::Split);
        let fragments = run
            .timer
            .time(Stage::Split, || segmenting::split(envelope.as_str(), count))
            .map_err(|e| run.machine.fail(e))?;
        for _ in &fragments {
            run.counters.add_fragment();
        }
        debug!(count = fragments.len(), envelope_len = envelope.len(), "envelope split");

        Ok(SealedMessage {
            digest,
            envelope,
            fragments,
        })
    }
}
