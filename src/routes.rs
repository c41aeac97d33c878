//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /r/{code}` - Short link redirect (records a visit)
//! - `GET /ping`     - Liveness probe
//! - `/api/*`        - Link and visit administration
//!
//! # Middleware
//!
//! Outermost first: path normalization, tracing, panic recovery, CORS, then
//! the request deadline around every handler.

use crate::api;
use crate::api::handlers::{ping_handler, redirect_handler};
use crate::api::middleware::{cors, timeout, tracing};
use crate::error::AppError;
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Router, middleware};
use std::any::Any;
use std::time::Duration;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router settings that do not live in [`AppState`].
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Origin allowed by CORS.
    pub cors_origin: HeaderValue,
    pub request_timeout: Duration,
}

/// Builds the routes with all middleware except path normalization.
pub fn router(state: AppState, config: RouterConfig) -> Router {
    Router::new()
        .route("/r/{code}", get(redirect_handler))
        .route("/ping", get(ping_handler))
        .nest("/api", api::routes::admin_routes())
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            config.request_timeout,
            timeout::layer,
        ))
        .layer(cors::layer(config.cors_origin))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] with trailing slashes
/// trimmed before routing.
pub fn app_router(state: AppState, config: RouterConfig) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, config))
}

/// Turns a handler panic into the usual 500 JSON envelope.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ::tracing::error!(panic = message, "handler panicked");
    AppError::Internal("internal server error".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{LinkRepository, MockLinkRepository};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn config() -> RouterConfig {
        RouterConfig {
            cors_origin: HeaderValue::from_static("http://localhost:5173"),
            request_timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_internal_error() {
        let mut repo = MockLinkRepository::new();
        repo.expect_get_all()
            .returning(|_| panic!("repository exploded"));
        let repo: Arc<dyn LinkRepository> = Arc::new(repo);

        let response = router(AppState::new(repo, "http://localhost:8080"), config())
            .oneshot(
                Request::builder()
                    .uri("/api/links")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "internal server error" }));
    }
}
