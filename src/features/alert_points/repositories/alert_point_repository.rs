use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::error::Result;
use crate::features::alert_points::models::{AlertPoint, NewAlertPoint};

/// Data access for alert points
#[async_trait]
pub trait AlertPointRepository: Send + Sync {
    /// Insert one point and return it with its assigned id.
    async fn create(&self, point: NewAlertPoint) -> Result<AlertPoint>;

    /// Every stored point, ordered by id.
    async fn list_all(&self) -> Result<Vec<AlertPoint>>;
}

pub struct SqliteAlertPointRepository {
    pool: SqlitePool,
}

impl SqliteAlertPointRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlertPointRepository for SqliteAlertPointRepository {
    async fn create(&self, point: NewAlertPoint) -> Result<AlertPoint> {
        let created = sqlx::query_as::<_, AlertPoint>(
            r#"
            INSERT INTO ponto_alerta (tipo, descricao, latitude, longitude)
            VALUES (?, ?, ?, ?)
            RETURNING id, tipo, descricao, latitude, longitude
            "#,
        )
        .bind(&point.kind)
        .bind(&point.description)
        .bind(point.latitude)
        .bind(point.longitude)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<AlertPoint>> {
        let points = sqlx::query_as::<_, AlertPoint>(
            r#"
            SELECT id, tipo, descricao, latitude, longitude
            FROM ponto_alerta
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(points)
    }
}
