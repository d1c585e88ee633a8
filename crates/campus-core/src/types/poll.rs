use crate::types::enums::{PollKind, PollScope};
use crate::types::ids::{PollId, PollResponseId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: PollId,
    pub title: String,
    pub description: Option<String>,
    pub kind: PollKind,
    pub options: Vec<PollOption>,
    /// Set when `kind` is `evaluation`.
    pub target_instructor_id: Option<String>,
    pub target_instructor_name: Option<String>,
    pub created_for: PollScope,
    pub target_room_id: Option<String>,
    pub created_by: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub id: String,
    pub label: String,
}

/// A single student's submission. One response per student per poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollResponse {
    pub id: PollResponseId,
    pub poll_id: PollId,
    pub student_id: String,
    pub student_name: Option<String>,
    pub option_id: Option<String>,
    pub text_answer: Option<String>,
    pub target_instructor_id: Option<String>,
    pub satisfaction_level: Option<u8>,
    pub content_delivery_rating: Option<u8>,
    pub recommendations: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollWithResponses {
    pub poll: Poll,
    pub responses: Vec<PollResponse>,
}
