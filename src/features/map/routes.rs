use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::map::handlers;
use crate::features::map::services::MapPageService;

pub fn routes(service: Arc<MapPageService>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .with_state(service)
}
