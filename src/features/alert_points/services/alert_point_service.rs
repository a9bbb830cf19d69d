use std::sync::Arc;

use crate::core::error::Result;
use crate::features::alert_points::dtos::{AlertPointResponseDto, SaveAlertPointDto};
use crate::features::alert_points::repositories::AlertPointRepository;

/// Service for saving and listing alert points
pub struct AlertPointService {
    repository: Arc<dyn AlertPointRepository>,
}

impl AlertPointService {
    pub fn new(repository: Arc<dyn AlertPointRepository>) -> Self {
        Self { repository }
    }

    /// Store a validated point
    pub async fn save(&self, dto: SaveAlertPointDto) -> Result<AlertPointResponseDto> {
        let point = self.repository.create(dto.into()).await.map_err(|e| {
            tracing::error!("Failed to save alert point: {}", e);
            e
        })?;

        tracing::info!(
            "Alert point saved: id={}, tipo={}, lat={}, lng={}",
            point.id,
            point.kind,
            point.latitude,
            point.longitude
        );

        Ok(point.into())
    }

    /// All stored points, ordered by id
    pub async fn list(&self) -> Result<Vec<AlertPointResponseDto>> {
        let points = self.repository.list_all().await?;
        tracing::debug!("Listing {} alert point(s)", points.len());

        Ok(points.into_iter().map(Into::into).collect())
    }
}
