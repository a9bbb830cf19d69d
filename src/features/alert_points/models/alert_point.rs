use sqlx::FromRow;

use crate::features::alert_points::dtos::{AlertPointResponseDto, SaveAlertPointDto};

/// Database model for a row of `ponto_alerta`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AlertPoint {
    pub id: i64,
    #[sqlx(rename = "tipo")]
    pub kind: String,
    #[sqlx(rename = "descricao")]
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Data for inserting a new alert point
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlertPoint {
    pub kind: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<SaveAlertPointDto> for NewAlertPoint {
    fn from(dto: SaveAlertPointDto) -> Self {
        Self {
            kind: dto.tipo,
            description: dto.descricao,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

impl From<AlertPoint> for AlertPointResponseDto {
    fn from(p: AlertPoint) -> Self {
        Self {
            id: p.id,
            tipo: p.kind,
            descricao: p.description,
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}
