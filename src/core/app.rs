use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::{middleware, openapi};
use crate::features::alert_points::{routes as alert_points_routes, AlertPointService};
use crate::features::map::{routes as map_routes, MapPageService};

/// Services shared by every request, built once at startup
#[derive(Clone)]
pub struct AppServices {
    pub alert_points: Arc<AlertPointService>,
    pub map_page: Arc<MapPageService>,
}

/// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Assemble the application router with its middleware stack
pub fn build_router(config: &Config, services: AppServices) -> Router {
    let swagger = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", openapi::api_doc(&config.swagger));

    Router::new()
        .merge(swagger)
        .merge(map_routes::routes(services.map_page))
        .merge(alert_points_routes::routes(services.alert_points))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(&config.app.cors_allowed_origins))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{AppError, Result};
    use crate::features::alert_points::models::{AlertPoint, NewAlertPoint};
    use crate::features::alert_points::AlertPointRepository;
    use crate::shared::test_helpers::{random_points, test_app, test_config, test_services};
    use async_trait::async_trait;
    use axum::body::Bytes;
    use axum::http::{HeaderName, HeaderValue};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn count_rows(pool: &sqlx::SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM ponto_alerta")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_save_point_returns_created_message() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/salvar_ponto")
            .json(&json!({
                "tipo": "alagamento",
                "descricao": "Rua X",
                "latitude": -23.55,
                "longitude": -46.63
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({"mensagem": "Ponto salvo com sucesso!"}));
    }

    #[tokio::test]
    async fn test_saved_point_is_listed() {
        let app = test_app().await;

        app.server
            .post("/api/salvar_ponto")
            .json(&json!({
                "tipo": "alagamento",
                "descricao": "Rua X",
                "latitude": -23.55,
                "longitude": -46.63
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = app.server.get("/api/pontos_alerta").await;
        response.assert_status_ok();

        let points: Vec<Value> = response.json();
        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert!(point["id"].is_i64());
        assert_eq!(point["tipo"], "alagamento");
        assert_eq!(point["descricao"], "Rua X");
        assert_eq!(point["latitude"], -23.55);
        assert_eq!(point["longitude"], -46.63);
    }

    #[tokio::test]
    async fn test_list_points_empty_store() {
        let app = test_app().await;

        let response = app.server.get("/api/pontos_alerta").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_index_page_on_empty_store() {
        let app = test_app().await;

        let response = app.server.get("/").await;

        response.assert_status_ok();
        let content_type = response.header("content-type");
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
        assert!(response.text().contains("<html"));
    }

    #[tokio::test]
    async fn test_missing_tipo_is_rejected_without_row() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/salvar_ponto")
            .json(&json!({"descricao": "Rua X", "latitude": -23.55, "longitude": -46.63}))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["mensagem"].as_str().unwrap().contains("tipo"));
        assert_eq!(count_rows(&app.pool).await, 0);
    }

    #[tokio::test]
    async fn test_invalid_bodies_are_client_errors() {
        let app = test_app().await;

        let bodies = [
            json!({"tipo": "alagamento", "latitude": "abc", "longitude": -46.63}),
            json!({"tipo": "alagamento", "latitude": -23.55}),
            json!({"tipo": "", "latitude": -23.55, "longitude": -46.63}),
            json!({"tipo": "alagamento", "latitude": 123.0, "longitude": -46.63}),
            json!({"tipo": 5, "latitude": -23.55, "longitude": -46.63}),
            json!([1, 2, 3]),
        ];

        for body in bodies {
            let response = app.server.post("/api/salvar_ponto").json(&body).await;
            response.assert_status_bad_request();
        }

        let response = app.server.post("/api/salvar_ponto").text("tipo=x").await;
        response.assert_status_bad_request();

        assert_eq!(count_rows(&app.pool).await, 0);
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let app = test_app().await;

        let response = app
            .server
            .post("/api/salvar_ponto")
            .json(&json!({"tipo": "   ", "latitude": 91.0, "longitude": 181.0}))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        let errors = body["erros"].as_array().unwrap();
        assert!(!errors.is_empty());
        let joined = body["mensagem"].as_str().unwrap();
        assert!(joined.contains("tipo: "));
        assert!(joined.contains("latitude"));
        assert!(joined.contains("longitude"));
        assert!(!joined.contains("kind"));
        assert!(errors.iter().any(|e| e.as_str().unwrap().starts_with("tipo: ")));
    }

    #[tokio::test]
    async fn test_coordinates_are_stored_and_listed_exactly() {
        let app = test_app().await;

        // Seventeen significant digits, where a fast float parser drifts by one ulp
        let body = r#"{"tipo":"a","latitude":47.090520161879596,"longitude":-52.135029437870756}"#;
        app.server
            .post("/api/salvar_ponto")
            .bytes(Bytes::from_static(body.as_bytes()))
            .content_type("application/json")
            .await
            .assert_status(StatusCode::CREATED);

        let stored: (f64, f64) = sqlx::query_as("SELECT latitude, longitude FROM ponto_alerta")
            .fetch_one(&app.pool)
            .await
            .unwrap();
        assert_eq!(stored, (47.090520161879596, -52.135029437870756));

        let response = app.server.get("/api/pontos_alerta").await;
        assert!(response.text().contains("\"latitude\":47.090520161879596"));
        let listed: Vec<Value> = response.json();
        assert_eq!(listed[0]["latitude"].as_f64(), Some(47.090520161879596));
        assert_eq!(listed[0]["longitude"].as_f64(), Some(-52.135029437870756));
    }

    #[tokio::test]
    async fn test_round_trip_for_random_batches() {
        for n in [0usize, 1, 7, 25] {
            let app = test_app().await;
            let saved = random_points(n);

            for point in &saved {
                app.server
                    .post("/api/salvar_ponto")
                    .json(point)
                    .await
                    .assert_status(StatusCode::CREATED);
            }

            let listed: Vec<Value> = app.server.get("/api/pontos_alerta").await.json();
            assert_eq!(listed.len(), n);

            let mut ids = Vec::new();
            for (sent, got) in saved.iter().zip(&listed) {
                assert_eq!(got["tipo"], sent["tipo"]);
                assert_eq!(got["descricao"], sent["descricao"]);
                assert_eq!(got["latitude"], sent["latitude"]);
                assert_eq!(got["longitude"], sent["longitude"]);
                ids.push(got["id"].as_i64().unwrap());
            }
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[tokio::test]
    async fn test_health_and_unknown_route() {
        let app = test_app().await;

        app.server.get("/health").await.assert_status_ok();
        app.server
            .get("/api/nao_existe")
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let app = test_app().await;

        let response = app
            .server
            .get("/health")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("abc-123"),
            )
            .await;
        assert_eq!(response.header("x-request-id"), "abc-123");

        let response = app.server.get("/health").await;
        assert!(!response.header("x-request-id").is_empty());
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = test_app().await;

        let response = app.server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();
        let doc: Value = response.json();
        assert!(doc["paths"]["/api/salvar_ponto"].is_object());
    }

    struct FailingRepository;

    #[async_trait]
    impl AlertPointRepository for FailingRepository {
        async fn create(&self, _point: NewAlertPoint) -> Result<AlertPoint> {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        }

        async fn list_all(&self) -> Result<Vec<AlertPoint>> {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        }
    }

    #[tokio::test]
    async fn test_persistence_failure_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let services = test_services(&config, Arc::new(FailingRepository));
        let server = TestServer::new(build_router(&config, services)).unwrap();

        let response = server
            .post("/api/salvar_ponto")
            .json(&json!({"tipo": "alagamento", "latitude": 0.0, "longitude": 0.0}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["mensagem"], "Database error occurred");

        server
            .get("/api/pontos_alerta")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        // The page does not depend on the store
        server.get("/").await.assert_status_ok();
    }
}
