use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{build_campus, AppState, StoreProvider};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use campus_core::error::AnnouncementError;
use campus_core::types::announcement::Announcement;
use campus_core::types::io::{CreateAnnouncementInput, UpdateAnnouncementInput};
use campus_core::types::AnnouncementId;
use campus_core::CampusError;
use serde::Deserialize;
use utoipa::IntoParams;

pub fn router<P: StoreProvider>(state: AppState<P>) -> Router {
    Router::new()
        .route(
            "/announcements",
            post(create_announcement::<P>).get(list_announcements::<P>),
        )
        .route(
            "/announcements/{id}",
            get(get_announcement::<P>)
                .put(update_announcement::<P>)
                .delete(delete_announcement::<P>),
        )
        .with_state(state)
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementsQuery {
    pub institution_slug: Option<String>,
}

fn parse_id(id: String) -> Result<AnnouncementId, CampusError> {
    AnnouncementId::new(id).map_err(|err| {
        CampusError::Announcement(AnnouncementError::InvalidInput {
            message: err.to_string(),
        })
    })
}

#[utoipa::path(
    post,
    path = "/api/announcements",
    request_body = CreateAnnouncementInput,
    responses((status = 201, body = Announcement))
)]
pub(crate) async fn create_announcement<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<CreateAnnouncementInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.announcements().create(input) {
        Ok(announcement) => (StatusCode::CREATED, Json(announcement)).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/announcements",
    params(AnnouncementsQuery),
    responses((status = 200, body = Vec<Announcement>))
)]
pub(crate) async fn list_announcements<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Query(query): Query<AnnouncementsQuery>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus
        .announcements()
        .list(query.institution_slug.as_deref())
    {
        Ok(announcements) => Json(announcements).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/announcements/{id}",
    params(("id" = String, Path, description = "Announcement ID")),
    responses((status = 200, body = Announcement))
)]
pub(crate) async fn get_announcement<P: StoreProvider>(
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
    match campus.announcements().get(&id) {
        Ok(announcement) => Json(announcement).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    params(("id" = String, Path, description = "Announcement ID")),
    request_body = UpdateAnnouncementInput,
    responses((status = 200, body = Announcement))
)]
pub(crate) async fn update_announcement<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
    Json(input): Json<UpdateAnnouncementInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.announcements().update(&id, input) {
        Ok(announcement) => Json(announcement).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    params(("id" = String, Path, description = "Announcement ID")),
    responses((status = 204))
)]
pub(crate) async fn delete_announcement<P: StoreProvider>(
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
    match campus.announcements().delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
