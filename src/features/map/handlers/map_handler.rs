use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::Result;
use crate::features::map::services::MapPageService;

/// Render the map page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Map page", content_type = "text/html", body = String),
        (status = 500, description = "Template could not be rendered")
    ),
    tag = "map"
)]
pub async fn index(State(service): State<Arc<MapPageService>>) -> Result<Html<String>> {
    let page = service.render_index()?;
    Ok(Html(page))
}
