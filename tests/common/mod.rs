#![allow(dead_code)]

use axum::{Router, extract::ConnectInfo, http::HeaderValue};
use axum_test::TestServer;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::routes::{RouterConfig, app_router};
use link_shortener::state::AppState;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;

pub const BASE_URL: &str = "http://localhost:8080";
pub const UI_URL: &str = "http://localhost:5173";
pub const PEER_ADDR: &str = "127.0.0.1:12345";

/// Inserts a fixed `ConnectInfo` so handlers see a peer address without a
/// real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Test server over an in-memory repository the test can inspect directly.
pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<InMemoryLinkRepository>,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(false)
}

pub fn create_test_app_with(behind_proxy: bool) -> TestApp {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let repository: Arc<dyn LinkRepository> = repo.clone();

    let state = AppState::new(repository, BASE_URL)
        .with_behind_proxy(behind_proxy)
        .with_visit_timeout(Duration::from_secs(5));

    let service = app_router(
        state,
        RouterConfig {
            cors_origin: HeaderValue::from_static(UI_URL),
            request_timeout: Duration::from_secs(30),
        },
    );

    // The production service wrapped so the test server can drive it.
    let app = Router::new()
        .fallback_service(service)
        .layer(MockConnectInfoLayer);

    TestApp {
        server: TestServer::new(app).unwrap(),
        repo,
    }
}

/// Creates a link through the API and returns the response body.
pub async fn create_link(server: &TestServer, original_url: &str, short_name: &str) -> Value {
    let response = server
        .post("/api/links")
        .json(&json!({ "original_url": original_url, "short_name": short_name }))
        .await;

    assert_eq!(response.status_code(), 201, "{}", response.text());
    response.json::<Value>()
}
