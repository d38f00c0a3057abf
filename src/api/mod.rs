pub mod auth;
pub mod cors;
pub mod procedimentos;

use crate::config::Config;
use crate::db::Repository;
use axum::{
    middleware,
    routing::{delete, get, get_service},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{services::ServeFile, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let index = ServeFile::new(&state.config.index_path);

    Router::new()
        .route("/", get_service(index))
        .route(
            "/api/procedimentos",
            get(procedimentos::list_procedimentos).post(procedimentos::create_procedimento),
        )
        .route(
            "/api/procedimentos/:id",
            delete(procedimentos::delete_procedimento),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(cors::apply_cors_headers))
                .layer(middleware::from_fn(cors::preflight)),
        )
        .with_state(state)
}
