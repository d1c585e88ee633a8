use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{build_campus, AppState, StoreProvider};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use campus_core::types::io::CreateSlotInput;
use campus_core::types::slot::ConsultationSlot;

pub fn router<P: StoreProvider>(state: AppState<P>) -> Router {
    Router::new()
        .route(
            "/helpdesk/consultation-slots",
            post(publish_slot::<P>).get(list_slots::<P>),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/helpdesk/consultation-slots",
    request_body = CreateSlotInput,
    responses((status = 201, body = ConsultationSlot))
)]
pub(crate) async fn publish_slot<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<CreateSlotInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.slots().publish(input) {
        Ok(slot) => (StatusCode::CREATED, Json(slot)).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/helpdesk/consultation-slots",
    responses((status = 200, body = Vec<ConsultationSlot>))
)]
pub(crate) async fn list_slots<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.slots().list() {
        Ok(slots) => Json(slots).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
