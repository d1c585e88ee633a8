use crate::error::SlotError;
use crate::types::io::CreateSlotInput;
use crate::types::ConsultationSlot;

pub trait SlotRepository {
    fn create(&self, input: CreateSlotInput) -> Result<ConsultationSlot, SlotError>;
    /// Ordered by weekday, then start time.
    fn list(&self) -> Result<Vec<ConsultationSlot>, SlotError>;
}
