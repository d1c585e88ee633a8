use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{build_campus, AppState, StoreProvider};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{post, put};
use axum::{Extension, Json, Router};
use campus_core::error::ResourceError;
use campus_core::types::io::{
    CreateCourseInput, CreateItemInput, UpdateCourseInput, UpdateItemInput,
};
use campus_core::types::resource::{ResourceCourse, ResourceItem};
use campus_core::types::{CourseId, ItemId};
use campus_core::CampusError;

pub fn router<P: StoreProvider>(state: AppState<P>) -> Router {
    Router::new()
        .route(
            "/resources/courses",
            post(create_course::<P>).get(list_courses::<P>),
        )
        .route(
            "/resources/courses/{id}",
            put(update_course::<P>).delete(delete_course::<P>),
        )
        .route(
            "/resources/courses/{id}/items",
            post(create_item::<P>).get(list_items::<P>),
        )
        .route(
            "/resources/courses/{id}/items/{item_id}",
            put(update_item::<P>).delete(delete_item::<P>),
        )
        .with_state(state)
}

fn invalid(message: String) -> CampusError {
    CampusError::Resource(ResourceError::InvalidInput { message })
}

#[utoipa::path(
    post,
    path = "/api/resources/courses",
    request_body = CreateCourseInput,
    responses((status = 201, body = ResourceCourse))
)]
pub(crate) async fn create_course<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<CreateCourseInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.resources().create_course(input) {
        Ok(course) => (StatusCode::CREATED, Json(course)).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/resources/courses",
    responses((status = 200, body = Vec<ResourceCourse>))
)]
pub(crate) async fn list_courses<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.resources().list_courses() {
        Ok(courses) => Json(courses).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/resources/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    request_body = UpdateCourseInput,
    responses((status = 200, body = ResourceCourse))
)]
pub(crate) async fn update_course<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCourseInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let id = match CourseId::new(id).map_err(|err| invalid(err.to_string())) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.resources().update_course(&id, input) {
        Ok(course) => Json(course).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/resources/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    responses((status = 204))
)]
pub(crate) async fn delete_course<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let id = match CourseId::new(id).map_err(|err| invalid(err.to_string())) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.resources().delete_course(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/resources/courses/{id}/items",
    params(("id" = String, Path, description = "Course ID")),
    request_body = CreateItemInput,
    responses((status = 201, body = ResourceItem))
)]
pub(crate) async fn create_item<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
    Json(input): Json<CreateItemInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let id = match CourseId::new(id).map_err(|err| invalid(err.to_string())) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.resources().create_item(&id, input) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/resources/courses/{id}/items",
    params(("id" = String, Path, description = "Course ID")),
    responses((status = 200, body = Vec<ResourceItem>))
)]
pub(crate) async fn list_items<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let id = match CourseId::new(id).map_err(|err| invalid(err.to_string())) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.resources().list_items(&id) {
        Ok(items) => Json(items).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/resources/courses/{id}/items/{item_id}",
    params(
        ("id" = String, Path, description = "Course ID"),
        ("item_id" = String, Path, description = "Item ID")
    ),
    request_body = UpdateItemInput,
    responses((status = 200, body = ResourceItem))
)]
pub(crate) async fn update_item<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path((_course_id, item_id)): Path<(String, String)>,
    Json(input): Json<UpdateItemInput>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let item_id = match ItemId::new(item_id).map_err(|err| invalid(err.to_string())) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.resources().update_item(&item_id, input) {
        Ok(item) => Json(item).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/resources/courses/{id}/items/{item_id}",
    params(
        ("id" = String, Path, description = "Course ID"),
        ("item_id" = String, Path, description = "Item ID")
    ),
    responses((status = 204))
)]
pub(crate) async fn delete_item<P: StoreProvider>(
    State(state): State<AppState<P>>,
    Extension(correlation): Extension<CorrelationId>,
    Path((_course_id, item_id)): Path<(String, String)>,
) -> Response {
    let campus = match build_campus(&state) {
        Ok(campus) => campus,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let item_id = match ItemId::new(item_id).map_err(|err| invalid(err.to_string())) {
        Ok(id) => id,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match campus.resources().delete_item(&item_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
