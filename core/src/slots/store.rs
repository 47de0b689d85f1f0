use crate::slots::types::SlotError;
use crate::types::SlotId;

/// Addressable carrier slots (video frames).
///
/// Calls are synchronous and issued one slot at a time. Retrying flaky
/// media I/O is the implementor's business; the pipeline aborts on the
/// first error it sees.
pub trait SlotStore {
    /// Raw content of one slot, e.g. a decoded frame.
    type Content;

    /// Number of slots; ids run from 0 to `slot_count() - 1`.
    fn slot_count(&self) -> Result<u32, SlotError>;

    /// Read the raw content of `slot`.
    fn extract(&mut self, slot: SlotId) -> Result<Self::Content, SlotError>;

    /// Hide `text` in `slot` and return the updated content.
    fn embed(&mut self, slot: SlotId, text: &str) -> Result<Self::Content, SlotError>;

    /// Recover hidden text from slot content. `None` means the slot carries
    /// no fragment.
    fn reveal(&self, content: &Self::Content) -> Option<String>;
}

/// Secondary artifact holding the encrypted slot-index list.
pub trait IndexCarrier {
    fn hide(&mut self, text: &str) -> Result<(), SlotError>;

    fn reveal(&self) -> Option<String>;
}
