use crate::types::ids::SlotId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recurring weekly availability window published by an instructor.
/// Informational only: there is no booking or conflict detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationSlot {
    pub id: SlotId,
    pub instructor_id: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
    pub start_minutes: u16,
    pub end_minutes: u16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
