use crate::types::enums::{SignupRole, SignupStatus};
use crate::types::ids::SignupId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An account request awaiting review by an institution admin. Approval only
/// flips the status here; provisioning the actual account happens in the
/// external user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub id: SignupId,
    pub role: SignupRole,
    pub name: String,
    pub email: String,
    pub institution_slug: String,
    pub status: SignupStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
