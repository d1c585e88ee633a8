pub mod announcements;
pub mod error;
pub mod polls;
pub mod requests;
pub mod resources;
pub mod signups;
pub mod slots;

use crate::middleware::correlation::correlation_middleware;
use crate::{openapi, AppState, StoreProvider};
use axum::middleware;
use axum::Router;

pub fn router<P: StoreProvider>(state: AppState<P>) -> Router {
    let api = Router::new()
        .merge(requests::router(state.clone()))
        .merge(slots::router(state.clone()))
        .merge(announcements::router(state.clone()))
        .merge(polls::router(state.clone()))
        .merge(resources::router(state.clone()))
        .merge(signups::router(state))
        .merge(openapi::router())
        .route_layer(middleware::from_fn(correlation_middleware));

    Router::new().nest("/api", api)
}
