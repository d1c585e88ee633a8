use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{build_campus, AppState, StoreProvider};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use campus_core::error::SignupError;
use campus_core::types::io::{SignupDecisionInput, SubmitSignupInput};
use campus_core::types::signup::SignupRequest;
use campus_core::types::SignupId;
use campus_core::CampusError;

pub fn router<P: StoreProvider>(state: AppState<P>) -> Router {
    Router::new()
        .route("/signup/requests", post(submit_signup::<P>))
        // The path segment here is an institution slug, not an id.
        .route("/signup/requests/{id}", get(list_signups::<P>))
        .route("/signup/requests/{id}/status", put(decide_signup::<P>))
        .with_state(state)
}

fn parse_id(id: String) -> Result<SignupId, CampusError> {
    SignupId::new(id).map_err(|err| {
        CampusError::Signup(SignupError::InvalidInput {
            message: err.to_string(),
        })
    })
}

#[utoipa::path(
    post,
    path = "/api/signup/requests",
    request_body = SubmitSignupInput,
    responses((status = 201, body = SignupRequest))
)]
pub(crate) async fn submit_signup<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<SubmitSignupInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.signups().submit(input) {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/signup/requests/{id}",
    params(("id" = String, Path, description = "Institution slug")),
    responses((status = 200, body = Vec<SignupRequest>))
)]
pub(crate) async fn list_signups<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(institution_slug): Path<String>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.signups().list(&institution_slug) {
        Ok(requests) => Json(requests).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/signup/requests/{id}/status",
    params(("id" = String, Path, description = "Signup request ID")),
    request_body = SignupDecisionInput,
    responses((status = 200, body = SignupRequest))
)]
pub(crate) async fn decide_signup<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
    Json(input): Json<SignupDecisionInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.signups().decide(&id, input.status, input.note) {
        Ok(request) => Json(request).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
