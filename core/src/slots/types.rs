use std::collections::HashSet;

use crate::segmenting::Fragment;
use crate::types::SlotId;

#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("slot {slot} is out of range (carrier has {count} slots)")]
    OutOfRange { slot: SlotId, count: u32 },

    /// Failure reported by a media backend.
    #[error("slot backend failure: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    #[error("{fragments} fragments but {slots} slots supplied")]
    CountMismatch { fragments: usize, slots: usize },

    #[error("slot {0} assigned twice")]
    DuplicateSlot(SlotId),
}

/// Pairing of fragments with carrier slots.
///
/// Slots are sorted ascending before pairing, so fragment `i` lands in the
/// `i`-th smallest slot. A receiver that reads the chosen slots in
/// ascending order therefore sees the fragments in sequence order, whatever
/// order the caller listed the slots in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotAssignment {
    pairs: Vec<(SlotId, Fragment)>,
}

impl SlotAssignment {
    /// Pair exactly one fragment per slot.
    pub fn new(fragments: Vec<Fragment>, slots: &[SlotId]) -> Result<Self, AssignmentError> {
        if fragments.len() != slots.len() {
            return Err(AssignmentError::CountMismatch {
                fragments: fragments.len(),
                slots: slots.len(),
            });
        }
        Self::fill(fragments, slots)
    }

    /// Pair the fragments with the smallest `fragments.len()` slots.
    ///
    /// Short envelopes yield fewer fragments than requested; the unused
    /// (largest) slots are left alone. Every slot id is still checked for
    /// duplicates.
    pub fn fill(mut fragments: Vec<Fragment>, slots: &[SlotId]) -> Result<Self, AssignmentError> {
        if fragments.len() > slots.len() {
            return Err(AssignmentError::CountMismatch {
                fragments: fragments.len(),
                slots: slots.len(),
            });
        }

        let mut seen = HashSet::with_capacity(slots.len());
        for &slot in slots {
            if !seen.insert(slot) {
                return Err(AssignmentError::DuplicateSlot(slot));
            }
        }

        let mut ordered = slots.to_vec();
        ordered.sort_unstable();
        fragments.sort_by_key(|f| f.sequence_index);

        Ok(Self {
            pairs: ordered.into_iter().zip(fragments).collect(),
        })
    }

    /// `(slot, fragment)` pairs in ascending sequence (and slot) order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Fragment)> {
        self.pairs.iter().map(|(slot, fragment)| (*slot, fragment))
    }

    /// Slot ids in ascending order.
    pub fn slots(&self) -> Vec<SlotId> {
        self.pairs.iter().map(|(slot, _)| *slot).collect()
    }

    pub fn slot_of(&self, sequence_index: u32) -> Option<SlotId> {
        self.pairs
            .iter()
            .find(|(_, f)| f.sequence_index == sequence_index)
            .map(|(slot, _)| *slot)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
