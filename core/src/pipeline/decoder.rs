//! Decode direction: chosen slots → revealed fragments → envelope →
//! framed payload → message plus verification flag.

use std::io::Write;

use tracing::{debug, info, trace, warn};

use crate::config::StegoConfig;
use crate::crypto::{CipherEnvelope, CipherService};
use crate::framing::{self, Deframed};
use crate::frames::{self, FrameIndexChannel, FrameIndexError};
use crate::pipeline::state::{DecodeFailure, DecoderState, Machine};
use crate::segmenting;
use crate::slots::{IndexCarrier, SlotError, SlotStore};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::{SlotId, StegoError};

/// How the receiver learns which slots carry fragments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotSelection {
    /// Text revealed from the index carrier (an encrypted slot list).
    Revealed(String),
    /// A frame spec typed by the user, e.g. `1-48` or `1,4,6-9`.
    Manual(String),
    /// Slot ids resolved by the caller.
    Explicit(Vec<SlotId>),
    /// Every slot of the carrier. Slow on long videos.
    FullScan,
}

/// Recovered message.
#[derive(Clone, Debug)]
pub struct DecodedMessage {
    /// Checksum prefix matched the body.
    pub verified: bool,
    pub body: Vec<u8>,
    /// Slots that were read, ascending.
    pub slots: Vec<SlotId>,
    pub fragments_recovered: usize,
    pub telemetry: TelemetrySnapshot,
}

impl DecodedMessage {
    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Write the body to `writer`, e.g. a file the user chose.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), StegoError> {
        writer.write_all(&self.body)?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Decoder {
    cipher: CipherService,
}

struct Run {
    machine: Machine<DecoderState>,
    timer: TelemetryTimer,
    counters: TelemetryCounters,
}

impl Run {
    fn new() -> Self {
        Self {
            machine: Machine::new(DecoderState::Start, DecoderState::Failed, "decode"),
            timer: TelemetryTimer::new(),
            counters: TelemetryCounters::default(),
        }
    }
}

impl Decoder {
    pub fn new(cipher: CipherService) -> Self {
        Self { cipher }
    }

    pub fn from_config(config: &StegoConfig) -> Result<Self, StegoError> {
        Ok(Self::new(config.cipher.build()?))
    }

    pub fn cipher(&self) -> &CipherService {
        &self.cipher
    }

    /// Join fragment texts in the order given, decrypt and deframe.
    pub fn open<I, T>(&self, fragments: I) -> Result<Deframed, DecodeFailure>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut run = Run::new();
        run.machine.advance(DecoderState::Reveal);
        let texts: Vec<T> = fragments.into_iter().collect();
        if texts.is_empty() {
            return Err(run.machine.fail(StegoError::NoDataRevealed { slots_read: 0 }));
        }
        self.open_in(&mut run, &texts)
    }

    /// Turn a selection into ascending, unique slot ids within the carrier.
    ///
    /// Ids past the end of the carrier are dropped, as a video simply has
    /// no such frame.
    pub fn resolve_slots<S>(&self, store: &S, selection: &SlotSelection) -> Result<Vec<SlotId>, StegoError>
    where
        S: SlotStore,
    {
        let capacity = store.slot_count()?;

        let mut slots = match selection {
            SlotSelection::Revealed(text) => FrameIndexChannel::new(&self.cipher).decode(text)?,
            SlotSelection::Manual(spec) => frames::parse(spec)?,
            SlotSelection::Explicit(ids) => ids.clone(),
            SlotSelection::FullScan => return Ok((0..capacity).collect()),
        };

        slots.sort_unstable();
        slots.dedup();

        let before = slots.len();
        slots.retain(|&s| s < capacity);
        if slots.len() != before {
            warn!(dropped = before - slots.len(), capacity, "selected slots past end of carrier");
        }
        Ok(slots)
    }

    /// Full decode against a carrier.
    pub fn decode<S>(&self, store: &mut S, selection: SlotSelection) -> Result<DecodedMessage, DecodeFailure>
    where
        S: SlotStore,
    {
        let mut run = Run::new();

        // ---- SELECT_SLOTS ----
        run.machine.advance(DecoderState::SelectSlots);
        let slots = self
            .resolve_slots(store, &selection)
            .map_err(|e| run.machine.fail(e))?;
        debug!(count = slots.len(), "slots selected");

        // ---- REVEAL ----
        run.machine.advance(DecoderState::Reveal);
        let mut texts = Vec::new();
        for &slot in &slots {
            let revealed = run.timer.time(Stage::Reveal, || {
                let content = store.extract(slot)?;
                Ok::<_, SlotError>(store.reveal(&content))
            });
            match revealed.map_err(|e| run.machine.fail(e))? {
                Some(text) if !text.is_empty() => {
                    run.counters.add_slot(true);
                    run.counters.add_fragment();
                    texts.push(text);
                }
                _ => {
                    run.counters.add_slot(false);
                    trace!(slot, "slot carries no fragment");
                }
            }
        }

        if texts.is_empty() {
            return Err(run.machine.fail(StegoError::NoDataRevealed { slots_read: slots.len() }));
        }

        let fragments_recovered = texts.len();
        let deframed = self.open_in(&mut run, &texts)?;

        run.machine.advance(DecoderState::Done);
        run.timer.finish();
        info!(
            slots = slots.len(),
            fragments = fragments_recovered,
            verified = deframed.verified,
            "message decoded"
        );

        Ok(DecodedMessage {
            verified: deframed.verified,
            body: deframed.body,
            slots,
            fragments_recovered,
            telemetry: TelemetrySnapshot::from(&run.counters, &run.timer),
        })
    }

    /// Decode using the slot list hidden in `carrier`.
    pub fn decode_with_index<S>(
        &self,
        store: &mut S,
        carrier: &dyn IndexCarrier,
    ) -> Result<DecodedMessage, DecodeFailure>
    where
        S: SlotStore,
    {
        match carrier.reveal() {
            Some(text) => self.decode(store, SlotSelection::Revealed(text)),
            None => {
                let mut run = Run::new();
                run.machine.advance(DecoderState::SelectSlots);
                Err(run.machine.fail(FrameIndexError::Empty))
            }
        }
    }

    fn open_in<T: AsRef<str>>(&self, run: &mut Run, texts: &[T]) -> Result<Deframed, DecodeFailure> {
        // ---- JOIN ----
        run.machine.advance(DecoderState::Join);
        let joined = run.timer.time(Stage::Join, || segmenting::join(texts.iter().map(|t| t.as_ref())));
        let envelope = CipherEnvelope::new(joined.trim());
        run.counters.add_envelope(envelope.len());

        // ---- DECRYPT ----
        run.machine.advance(DecoderState::Decrypt);
        let payload = run
            .timer
            .time(Stage::Decrypt, || self.cipher.decrypt(&envelope))
            .map_err(|e| run.machine.fail(e))?;

        // ---- VERIFY ----
        run.machine.advance(DecoderState::Verify);
        let deframed = run.timer.time(Stage::Verify, || framing::deframe(&payload));
        run.counters.add_message(deframed.body.len(), payload.len());
        if !deframed.verified {
            warn!(payload_len = payload.len(), "checksum missing or mismatched; returning body unverified");
        }

        Ok(deframed)
    }
}
