//! In-memory carriers: stage fragments before media encoding, and drive
//! the pipeline in tests.

use crate::slots::store::{IndexCarrier, SlotStore};
use crate::slots::types::SlotError;
use crate::types::SlotId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySlot {
    pub hidden: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct MemorySlotStore {
    slots: Vec<MemorySlot>,
}

impl MemorySlotStore {
    /// A carrier with `count` empty slots.
    pub fn with_slots(count: u32) -> Self {
        Self {
            slots: vec![MemorySlot::default(); count as usize],
        }
    }

    /// Overwrite the hidden text of `slot` directly, bypassing `embed`.
    pub fn set_hidden(&mut self, slot: SlotId, text: Option<String>) -> Result<(), SlotError> {
        let entry = self.slot_mut(slot)?;
        entry.hidden = text;
        Ok(())
    }

    pub fn hidden(&self, slot: SlotId) -> Option<&str> {
        self.slots.get(slot as usize).and_then(|s| s.hidden.as_deref())
    }

    fn slot_mut(&mut self, slot: SlotId) -> Result<&mut MemorySlot, SlotError> {
        let count = self.slots.len() as u32;
        self.slots
            .get_mut(slot as usize)
            .ok_or(SlotError::OutOfRange { slot, count })
    }
}

impl SlotStore for MemorySlotStore {
    type Content = MemorySlot;

    fn slot_count(&self) -> Result<u32, SlotError> {
        Ok(self.slots.len() as u32)
    }

    fn extract(&mut self, slot: SlotId) -> Result<MemorySlot, SlotError> {
        self.slot_mut(slot).map(|s| s.clone())
    }

    fn embed(&mut self, slot: SlotId, text: &str) -> Result<MemorySlot, SlotError> {
        let entry = self.slot_mut(slot)?;
        entry.hidden = Some(text.to_owned());
        Ok(entry.clone())
    }

    fn reveal(&self, content: &MemorySlot) -> Option<String> {
        content.hidden.clone()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryIndexCarrier {
    hidden: Option<String>,
}

impl MemoryIndexCarrier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexCarrier for MemoryIndexCarrier {
    fn hide(&mut self, text: &str) -> Result<(), SlotError> {
        self.hidden = Some(text.to_owned());
        Ok(())
    }

    fn reveal(&self) -> Option<String> {
        self.hidden.clone()
    }
}
