use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::alert_points::dtos::{AlertPointResponseDto, SaveAlertPointDto};
use crate::features::alert_points::services::AlertPointService;
use crate::shared::constants::SAVE_SUCCESS_MESSAGE;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// List every stored alert point
///
/// Used by the map page to draw its markers. Returns an empty array when
/// nothing has been stored yet.
#[utoipa::path(
    get,
    path = "/api/pontos_alerta",
    responses(
        (status = 200, description = "All alert points ordered by id", body = Vec<AlertPointResponseDto>),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    ),
    tag = "alert_points"
)]
pub async fn list_points(
    State(service): State<Arc<AlertPointService>>,
) -> Result<Json<Vec<AlertPointResponseDto>>> {
    let points = service.list().await?;
    Ok(Json(points))
}

/// Save a new alert point
#[utoipa::path(
    post,
    path = "/api/salvar_ponto",
    request_body = SaveAlertPointDto,
    responses(
        (status = 201, description = "Point saved", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "alert_points"
)]
pub async fn save_point(
    State(service): State<Arc<AlertPointService>>,
    AppJson(dto): AppJson<SaveAlertPointDto>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    dto.validate().map_err(AppError::from_validation)?;

    service.save(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(SAVE_SUCCESS_MESSAGE)),
    ))
}
