use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::alert_points::handlers;
use crate::features::alert_points::services::AlertPointService;
use crate::shared::constants::{POINTS_PATH, SAVE_POINT_PATH};

/// Create routes for the alert points feature
pub fn routes(service: Arc<AlertPointService>) -> Router {
    Router::new()
        .route(POINTS_PATH, get(handlers::list_points))
        .route(SAVE_POINT_PATH, post(handlers::save_point))
        .with_state(service)
}
