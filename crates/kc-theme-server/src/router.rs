//! Router configuration.
//!
//! This module creates the main Axum router that combines all endpoints.

use axum::{
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    // Create health check routes
    let health = Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
        .route("/health/ready", get(readiness_check));

    let pages = Router::new()
        .route(
            "/realms/{realm}/login-actions/render",
            post(handlers::render_page),
        )
        .route("/preview", get(handlers::preview_index))
        .route("/preview/{page_id}", get(handlers::preview_page))
        .route("/resources/img/{file}", get(handlers::social_icon))
        .with_state(state.clone());

    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(health)
        .merge(pages)
        .route("/", get(root))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Root endpoint handler.
async fn root() -> Json<ServerInfo> {
    Json(ServerInfo {
        name: "Keycloak Rust login theme".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documentation: "https://github.com/keycloak/keycloak-rs".to_string(),
    })
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

/// Server information response.
#[derive(Serialize)]
pub struct ServerInfo {
    name: String,
    version: String,
    documentation: String,
}

/// Basic health check.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    })
}

/// Liveness check.
async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

/// Readiness check.
async fn readiness_check() -> StatusCode {
    // Rendering has no external dependencies.
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use kc_theme::{Theme, ThemeConfig};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;

    fn app_with(config: ServerConfig) -> Router {
        let theme = Theme::new(ThemeConfig::default()).unwrap();
        create_router(AppState::new(config, theme))
    }

    fn app() -> Router {
        app_with(ServerConfig::for_testing())
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn render_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/realms/acme/login-actions/render")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await;
        assert_eq!(response.0.status, "healthy");
    }

    #[tokio::test]
    async fn test_render_login() {
        let response = app()
            .oneshot(render_request(
                r#"{"pageId": "login.ftl", "realm": {"name": "acme", "password": true}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("id=\"kc-form-login\""));
    }

    #[tokio::test]
    async fn test_render_without_page_id_is_bad_request() {
        let response = app()
            .oneshot(render_request(r#"{"realm": {"name": "acme"}}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_preview_story() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/preview/login-otp.ftl?story=with-alternative-authenticator")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("id=\"kc-otp-credential-1\""));
    }

    #[tokio::test]
    async fn test_unknown_story_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/preview/login.ftl?story=nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preview_disabled() {
        let config = ServerConfig {
            preview_enabled: false,
            ..ServerConfig::for_testing()
        };
        let response = app_with(config)
            .oneshot(Request::builder().uri("/preview/login.ftl").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_social_icon() {
        let response = app()
            .oneshot(Request::builder().uri("/resources/img/google.svg").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");

        let response = app()
            .oneshot(Request::builder().uri("/resources/img/github.svg").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
