use utoipa::{Modify, OpenApi};

use crate::core::config::SwaggerConfig;
use crate::features::alert_points::{dtos as alert_points_dtos, handlers as alert_points_handlers};
use crate::features::map::handlers as map_handlers;
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Map page
        map_handlers::index,
        // Alert points
        alert_points_handlers::list_points,
        alert_points_handlers::save_point,
    ),
    components(
        schemas(
            // Shared
            MessageResponse,
            ErrorResponse,
            // Alert points
            alert_points_dtos::SaveAlertPointDto,
            alert_points_dtos::AlertPointResponseDto,
        )
    ),
    tags(
        (name = "map", description = "Interactive map page"),
        (name = "alert_points", description = "Geotagged hazard markers"),
    ),
    info(
        title = "Pontos de Alerta API",
        version = "0.1.0",
        description = "API for storing and listing map alert points",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&SwaggerConfig> for SwaggerInfoModifier {
    fn from(config: &SwaggerConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
        }
    }
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// OpenAPI document with info taken from config
pub fn api_doc(config: &SwaggerConfig) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier::from(config).modify(&mut openapi);
    openapi
}
