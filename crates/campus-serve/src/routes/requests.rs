use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{build_campus, AppState, StoreProvider};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use campus_core::error::RequestError;
use campus_core::types::io::{CreateRequestInput, RequestFilter, RespondInput};
use campus_core::types::request::HelpdeskRequest;
use campus_core::types::RequestId;
use campus_core::CampusError;

pub fn router<P: StoreProvider>(state: AppState<P>) -> Router {
    Router::new()
        .route(
            "/helpdesk/requests",
            post(file_request::<P>).get(list_requests::<P>),
        )
        .route(
            "/helpdesk/requests/{id}",
            get(get_request::<P>).delete(delete_request::<P>),
        )
        .route("/helpdesk/requests/{id}/status", put(respond::<P>))
        .with_state(state)
}

fn parse_id(id: String) -> Result<RequestId, CampusError> {
    RequestId::new(id).map_err(|err| {
        CampusError::Request(RequestError::InvalidInput {
            message: err.to_string(),
        })
    })
}

#[utoipa::path(
    post,
    path = "/api/helpdesk/requests",
    request_body = CreateRequestInput,
    responses((status = 201, body = HelpdeskRequest))
)]
pub(crate) async fn file_request<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<CreateRequestInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.helpdesk().file_request(input) {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/helpdesk/requests",
    params(RequestFilter),
    responses((status = 200, body = Vec<HelpdeskRequest>))
)]
pub(crate) async fn list_requests<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Query(filter): Query<RequestFilter>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.helpdesk().list(&filter) {
        Ok(requests) => Json(requests).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/helpdesk/requests/{id}",
    params(("id" = String, Path, description = "Request ID")),
    responses((status = 200, body = HelpdeskRequest))
)]
pub(crate) async fn get_request<P: StoreProvider>(
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
    match campus.helpdesk().get(&id) {
        Ok(request) => Json(request).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/helpdesk/requests/{id}/status",
    params(("id" = String, Path, description = "Request ID")),
    request_body = RespondInput,
    responses((status = 200, body = HelpdeskRequest))
)]
pub(crate) async fn respond<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
    Json(input): Json<RespondInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.helpdesk().respond(&id, input) {
        Ok(request) => Json(request).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/helpdesk/requests/{id}",
    params(("id" = String, Path, description = "Request ID")),
    responses((status = 204))
)]
pub(crate) async fn delete_request<P: StoreProvider>(
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
    match campus.helpdesk().delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
