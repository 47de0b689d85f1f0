//! telemetry/counters.rs
//! Mutable counters filled in while a pipeline runs, frozen into a
//! `TelemetrySnapshot` at the end.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Fragments produced by `split` (encode) or recovered from slots (decode).
    pub fragments: u64,
    /// Slots written (encode) or read (decode).
    pub slots_visited: u64,
    /// Slots read that revealed nothing.
    pub slots_empty: u64,
    /// Message bytes before framing / after deframing.
    pub bytes_message: u64,
    /// Framed payload bytes (checksum prefix included).
    pub bytes_framed: u64,
    /// Envelope text length.
    pub bytes_envelope: u64,
}

impl TelemetryCounters {
    pub fn add_message(&mut self, message_len: usize, framed_len: usize) {
        self.bytes_message += message_len as u64;
        self.bytes_framed += framed_len as u64;
    }

    pub fn add_envelope(&mut self, envelope_len: usize) {
        self.bytes_envelope += envelope_len as u64;
    }

    pub fn add_fragment(&mut self) {
        self.fragments += 1;
    }

    /// Record one slot visit; `carried` is false when nothing was revealed.
    pub fn add_slot(&mut self, carried: bool) {
        self.slots_visited += 1;
        if !carried {
            self.slots_empty += 1;
        }
    }

    /// Framing overhead: checksum prefix bytes.
    pub fn framing_overhead_bytes(&self) -> u64 {
        self.bytes_framed.saturating_sub(self.bytes_message)
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.fragments += other.fragments;
        self.slots_visited += other.slots_visited;
        self.slots_empty += other.slots_empty;
        self.bytes_message += other.bytes_message;
        self.bytes_framed += other.bytes_framed;
        self.bytes_envelope += other.bytes_envelope;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
