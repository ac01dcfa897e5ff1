use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::db::RoomsStorage;
use crate::handlers::{index_get, index_post};

#[derive(Clone)]
pub struct RoomsState {
    pub storage: RoomsStorage,
}

impl RoomsState {
    pub fn new(storage: RoomsStorage) -> Self {
        Self { storage }
    }
}

pub fn rooms_router(state: RoomsState) -> Router {
    Router::new()
        .route("/", get(index_get).post(index_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
