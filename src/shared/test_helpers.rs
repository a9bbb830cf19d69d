use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use fake::faker::address::en::StreetName;
use fake::faker::lorem::en::Word;
use fake::{Fake, Faker};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::core::app::{build_router, AppServices};
use crate::core::config::{
    AppConfig, Config, DatabaseConfig, MapConfig, SwaggerConfig, TemplateConfig,
};
use crate::core::database;
use crate::features::alert_points::{
    AlertPointRepository, AlertPointService, SqliteAlertPointRepository,
};
use crate::features::map::MapPageService;
use crate::shared::templates::TemplateEngine;

/// A migrated database in a fresh temporary directory.
/// Keep the `TempDir` alive for as long as the pool is used.
pub async fn test_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::with_path(dir.path().join("database").join("pontos_alerta.db"));
    let pool = database::create_pool(&config).await.unwrap();
    database::run_migrations(&pool).await.unwrap();
    (dir, pool)
}

pub fn test_config(dir: &Path) -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            debug: false,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 64 * 1024,
        },
        database: DatabaseConfig::with_path(dir.join("database").join("pontos_alerta.db")),
        templates: TemplateConfig {
            dir: TemplateConfig::default_dir(),
        },
        map: MapConfig::default(),
        swagger: SwaggerConfig {
            title: "Pontos de Alerta API".to_string(),
            version: "test".to_string(),
            description: "test".to_string(),
        },
    }
}

pub fn test_services(config: &Config, repository: Arc<dyn AlertPointRepository>) -> AppServices {
    let templates = Arc::new(TemplateEngine::new(&config.templates.dir, config.app.debug));
    AppServices {
        alert_points: Arc::new(AlertPointService::new(repository)),
        map_page: Arc::new(MapPageService::new(templates, config.map.clone())),
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    _dir: TempDir,
}

/// Full router over a temporary SQLite store
pub async fn test_app() -> TestApp {
    let (dir, pool) = test_pool().await;
    let config = test_config(dir.path());
    let repository = Arc::new(SqliteAlertPointRepository::new(pool.clone()));
    let server = TestServer::new(build_router(&config, test_services(&config, repository))).unwrap();

    TestApp {
        server,
        pool,
        _dir: dir,
    }
}

/// `n` valid save-point request bodies with random content
pub fn random_points(n: usize) -> Vec<Value> {
    (0..n)
        .map(|_| {
            let tipo: String = Word().fake();
            let descricao: Option<String> = if Faker.fake::<bool>() {
                Some(StreetName().fake())
            } else {
                None
            };
            let latitude: f64 = (-90.0..90.0).fake();
            let longitude: f64 = (-180.0..180.0).fake();

            json!({
                "tipo": tipo,
                "descricao": descricao,
                "latitude": latitude,
                "longitude": longitude
            })
        })
        .collect()
}
