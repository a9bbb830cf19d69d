use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::not_blank;

/// Request DTO for saving an alert point.
/// Fields carry their wire names so validation messages match the request keys.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveAlertPointDto {
    /// Hazard category (e.g. "alagamento")
    #[validate(
        length(min = 1, max = 50, message = "tipo must be 1-50 characters"),
        custom(function = "not_blank")
    )]
    #[schema(example = "alagamento")]
    pub tipo: String,

    /// Free-form description
    #[serde(default)]
    #[validate(length(max = 200, message = "descricao must not exceed 200 characters"))]
    #[schema(example = "Rua X")]
    pub descricao: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    #[schema(example = -23.55)]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    #[schema(example = -46.63)]
    pub longitude: f64,
}

/// Response DTO for an alert point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlertPointResponseDto {
    pub id: i64,
    pub tipo: String,
    pub descricao: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}
