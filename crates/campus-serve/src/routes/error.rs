use axum::http::StatusCode;
use axum::Json;
use campus_core::error::{
    AnnouncementError, CampusError, PollError, RequestError, ResourceError, SignupError, SlotError,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub code: &'static str,
    pub message: String,
    pub correlation_id: Option<String>,
}

pub fn map_error(
    err: &CampusError,
    correlation_id: Option<String>,
) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code, message) = match err {
        CampusError::Request(request) => map_request_error(request),
        CampusError::Slot(slot) => map_slot_error(slot),
        CampusError::Announcement(announcement) => map_announcement_error(announcement),
        CampusError::Poll(poll) => map_poll_error(poll),
        CampusError::Resource(resource) => map_resource_error(resource),
        CampusError::Signup(signup) => map_signup_error(signup),
        CampusError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            message.clone(),
        ),
    };

    (
        status,
        Json(ErrorEnvelope {
            code,
            message,
            correlation_id,
        }),
    )
}

fn map_request_error(err: &RequestError) -> (StatusCode, &'static str, String) {
    match err {
        RequestError::NotFound => (StatusCode::NOT_FOUND, "not_found", err.to_string()),
        RequestError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        RequestError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

fn map_slot_error(err: &SlotError) -> (StatusCode, &'static str, String) {
    match err {
        SlotError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        SlotError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

fn map_announcement_error(err: &AnnouncementError) -> (StatusCode, &'static str, String) {
    match err {
        AnnouncementError::NotFound => (StatusCode::NOT_FOUND, "not_found", err.to_string()),
        AnnouncementError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        AnnouncementError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

fn map_poll_error(err: &PollError) -> (StatusCode, &'static str, String) {
    match err {
        PollError::PollNotFound => (StatusCode::NOT_FOUND, "not_found", err.to_string()),
        PollError::DuplicateVote => (StatusCode::CONFLICT, "conflict", err.to_string()),
        PollError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        PollError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

fn map_resource_error(err: &ResourceError) -> (StatusCode, &'static str, String) {
    match err {
        ResourceError::CourseNotFound | ResourceError::ItemNotFound => {
            (StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        ResourceError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        ResourceError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}

fn map_signup_error(err: &SignupError) -> (StatusCode, &'static str, String) {
    match err {
        SignupError::NotFound => (StatusCode::NOT_FOUND, "not_found", err.to_string()),
        SignupError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        SignupError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        ),
    }
}
