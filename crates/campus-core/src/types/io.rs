use crate::types::enums::{
    AnnouncementType, AssigneeType, PollKind, PollScope, RequestCategory, RequestStatus,
    ResourceKind, SignupRole, SignupStatus,
};
use crate::types::poll::PollOption;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestInput {
    pub created_by: String,
    pub assignee_type: AssigneeType,
    pub assignee_id: Option<String>,
    pub institution_id: Option<String>,
    pub institution_slug: Option<String>,
    pub category: RequestCategory,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RespondInput {
    pub status: RequestStatus,
    pub note: Option<String>,
    pub responded_by: Option<String>,
}

/// Visibility filters for the three audiences: institutions scope by slug,
/// requesters by `created_by`, instructors see instructor-typed requests that
/// are unassigned or assigned to them. Filters combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RequestFilter {
    pub institution_slug: Option<String>,
    pub created_by: Option<String>,
    pub assigned_instructor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotInput {
    pub instructor_id: String,
    pub weekday: u8,
    pub start_minutes: u16,
    pub end_minutes: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementInput {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    pub announcement_type: Option<AnnouncementType>,
    pub institution_id: String,
    pub institution_slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub pinned: Option<bool>,
    pub announcement_type: Option<AnnouncementType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollInput {
    pub title: String,
    pub description: Option<String>,
    pub kind: Option<PollKind>,
    #[serde(default)]
    pub options: Vec<PollOption>,
    pub target_instructor_id: Option<String>,
    pub target_instructor_name: Option<String>,
    pub created_for: Option<PollScope>,
    pub target_room_id: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteInput {
    pub student_id: String,
    pub student_name: Option<String>,
    pub option_id: Option<String>,
    pub text_answer: Option<String>,
    pub target_instructor_id: Option<String>,
    pub satisfaction_level: Option<u8>,
    pub content_delivery_rating: Option<u8>,
    pub recommendations: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseInput {
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseInput {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemInput {
    pub title: String,
    pub kind: ResourceKind,
    pub url: Option<String>,
    pub content: Option<String>,
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemInput {
    pub title: Option<String>,
    pub kind: Option<ResourceKind>,
    pub url: Option<String>,
    pub content: Option<String>,
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSignupInput {
    pub role: SignupRole,
    pub name: String,
    pub email: String,
    pub institution_slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupDecisionInput {
    pub status: SignupStatus,
    pub note: Option<String>,
}
