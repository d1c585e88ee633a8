use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{build_campus, AppState, StoreProvider};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use campus_core::error::PollError;
use campus_core::types::io::{CreatePollInput, VoteInput};
use campus_core::types::poll::{Poll, PollResponse, PollWithResponses};
use campus_core::types::PollId;
use campus_core::CampusError;

pub fn router<P: StoreProvider>(state: AppState<P>) -> Router {
    Router::new()
        .route("/polls", post(create_poll::<P>).get(list_polls::<P>))
        .route("/polls/{id}", get(get_poll::<P>))
        .route("/polls/{id}/vote", post(vote::<P>))
        .with_state(state)
}

fn parse_id(id: String) -> Result<PollId, CampusError> {
    PollId::new(id).map_err(|err| {
        CampusError::Poll(PollError::InvalidInput {
            message: err.to_string(),
        })
    })
}

#[utoipa::path(
    post,
    path = "/api/polls",
    request_body = CreatePollInput,
    responses((status = 201, body = Poll))
)]
pub(crate) async fn create_poll<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<CreatePollInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.polls().create(input) {
        Ok(poll) => (StatusCode::CREATED, Json(poll)).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/polls",
    responses((status = 200, body = Vec<Poll>))
)]
pub(crate) async fn list_polls<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.polls().list() {
        Ok(polls) => Json(polls).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/polls/{id}",
    params(("id" = String, Path, description = "Poll ID")),
    responses((status = 200, body = PollWithResponses))
)]
pub(crate) async fn get_poll<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.polls().get_with_responses(&id) {
        Ok(poll) => Json(poll).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/polls/{id}/vote",
    params(("id" = String, Path, description = "Poll ID")),
    request_body = VoteInput,
    responses((status = 201, body = PollResponse))
)]
pub(crate) async fn vote<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
    Json(input): Json<VoteInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.polls().vote(&id, input) {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
