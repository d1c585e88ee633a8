use utoipa::OpenApi;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use campus_core::types::announcement::Announcement;
use campus_core::types::enums::{
    AnnouncementType, AssigneeType, PollKind, PollScope, RequestCategory, RequestStatus,
    ResourceKind, SignupRole, SignupStatus,
};
use campus_core::types::ids::{
    AnnouncementId, CourseId, ItemId, PollId, PollResponseId, RequestId, SignupId, SlotId,
};
use campus_core::types::io::{
    CreateAnnouncementInput, CreateCourseInput, CreateItemInput, CreatePollInput,
    CreateRequestInput, CreateSlotInput, RequestFilter, RespondInput, SignupDecisionInput,
    SubmitSignupInput, UpdateAnnouncementInput, UpdateCourseInput, UpdateItemInput, VoteInput,
};
use campus_core::types::poll::{Poll, PollOption, PollResponse, PollWithResponses};
use campus_core::types::request::{HelpdeskRequest, TimelineEntry};
use campus_core::types::resource::{ResourceCourse, ResourceItem};
use campus_core::types::signup::SignupRequest;
use campus_core::types::slot::ConsultationSlot;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::requests::file_request,
        crate::routes::requests::list_requests,
        crate::routes::requests::get_request,
        crate::routes::requests::respond,
        crate::routes::requests::delete_request,
        crate::routes::slots::publish_slot,
        crate::routes::slots::list_slots,
        crate::routes::announcements::create_announcement,
        crate::routes::announcements::list_announcements,
        crate::routes::announcements::get_announcement,
        crate::routes::announcements::update_announcement,
        crate::routes::announcements::delete_announcement,
        crate::routes::polls::create_poll,
        crate::routes::polls::list_polls,
        crate::routes::polls::get_poll,
        crate::routes::polls::vote,
        crate::routes::resources::create_course,
        crate::routes::resources::list_courses,
        crate::routes::resources::update_course,
        crate::routes::resources::delete_course,
        crate::routes::resources::create_item,
        crate::routes::resources::list_items,
        crate::routes::resources::update_item,
        crate::routes::resources::delete_item,
        crate::routes::signups::submit_signup,
        crate::routes::signups::list_signups,
        crate::routes::signups::decide_signup
    ),
    components(schemas(
        HelpdeskRequest,
        TimelineEntry,
        CreateRequestInput,
        RespondInput,
        RequestFilter,
        ConsultationSlot,
        CreateSlotInput,
        Announcement,
        CreateAnnouncementInput,
        UpdateAnnouncementInput,
        Poll,
        PollOption,
        PollResponse,
        PollWithResponses,
        CreatePollInput,
        VoteInput,
        ResourceCourse,
        ResourceItem,
        CreateCourseInput,
        UpdateCourseInput,
        CreateItemInput,
        UpdateItemInput,
        SignupRequest,
        SubmitSignupInput,
        SignupDecisionInput,
        RequestId,
        SlotId,
        AnnouncementId,
        PollId,
        PollResponseId,
        CourseId,
        ItemId,
        SignupId,
        AssigneeType,
        RequestCategory,
        RequestStatus,
        AnnouncementType,
        PollKind,
        PollScope,
        ResourceKind,
        SignupRole,
        SignupStatus
    ))
)]
struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi()
        .to_json()
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn router() -> Router {
    Router::new()
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(swagger_ui))
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> impl IntoResponse {
    let html = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Campus API Docs</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.ui = SwaggerUIBundle({ url: '/api/openapi.json', dom_id: '#swagger-ui' });
    </script>
  </body>
</html>
"#;
    axum::response::Html(html)
}
