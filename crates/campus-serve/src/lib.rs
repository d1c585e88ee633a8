pub mod middleware;
pub mod openapi;
pub mod routes;

use axum::Router;
use campus_core::{Campus, CampusError};
use campus_db::memory::MemStore;
use campus_db::schema;
use campus_db::store::DbStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// How a request gets its [`campus_core::Store`]. The file-backed provider
/// opens a fresh SQLite connection per request; the demo provider hands out
/// clones of one shared in-memory store. Picking the provider at startup
/// replaces any per-request "demo mode" switch.
pub trait StoreProvider: Clone + Send + Sync + 'static {
    type Store: campus_core::Store;

    fn open(&self) -> Result<Self::Store, CampusError>;
}

#[derive(Clone)]
pub struct FileStore {
    pub db_path: String,
}

impl StoreProvider for FileStore {
    type Store = DbStore;

    fn open(&self) -> Result<Self::Store, CampusError> {
        let conn = schema::open_at(&self.db_path).map_err(|err| {
            CampusError::Internal {
                message: err.to_string(),
            }
        })?;
        Ok(DbStore::new(conn))
    }
}

#[derive(Clone, Default)]
pub struct DemoStore {
    store: MemStore,
}

impl DemoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreProvider for DemoStore {
    type Store = MemStore;

    fn open(&self) -> Result<Self::Store, CampusError> {
        Ok(self.store.clone())
    }
}

#[derive(Clone)]
pub struct AppState<P: StoreProvider> {
    pub provider: P,
}

pub fn build_campus<P: StoreProvider>(state: &AppState<P>) -> Result<Campus<P::Store>, CampusError> {
    Ok(Campus::new(state.provider.open()?))
}

pub fn app<P: StoreProvider>(state: AppState<P>) -> Router {
    routes::router(state).layer(TraceLayer::new_for_http())
}

pub async fn serve<P: StoreProvider>(
    state: AppState<P>,
    addr: std::net::SocketAddr,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app(state)).await
}
