use crate::types::enums::{AssigneeType, RequestCategory, RequestStatus};
use crate::types::ids::RequestId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A support ticket filed by a student, tracked through an informal status
/// lifecycle. The `timeline` is append-only and owned by its request: every
/// status change pushes one entry, creation pushes none, so the first
/// response produces the first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelpdeskRequest {
    pub id: RequestId,
    pub created_by: String,
    pub assignee_type: AssigneeType,
    /// Absent means "any available" within the assignee type.
    pub assignee_id: Option<String>,
    pub institution_id: Option<String>,
    pub institution_slug: Option<String>,
    pub category: RequestCategory,
    pub title: String,
    pub description: Option<String>,
    pub status: RequestStatus,
    pub timeline: Vec<TimelineEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One immutable record of a status change, with an optional note and a
/// free-text responder label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub status: RequestStatus,
    pub note: Option<String>,
    pub at: DateTime<Utc>,
    pub by: Option<String>,
}
