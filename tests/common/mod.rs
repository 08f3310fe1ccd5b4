#![allow(dead_code)]

use axum::{Router, extract::ConnectInfo};
use axum_test::TestServer;
use hospital_registry::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use hospital_registry::routes::app_router;
use hospital_registry::state::AppState;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower::Layer;

/// Inserts the peer address that the rate limiter keys on.
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
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

pub fn docs_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("docs/API.md")
}

pub fn create_state_with_cache(pool: SqlitePool, cache: Arc<dyn CacheService>) -> AppState {
    AppState::new(Arc::new(pool), cache, docs_path())
}

/// State without response caching, for read-after-write assertions.
pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_state_with_cache(pool, Arc::new(NullCache::new()))
}

/// Full router (rate limits, cache, fallback) behind a mock peer address.
pub fn full_server(state: AppState) -> TestServer {
    let app: Router = app_router(state).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

pub fn cached_server(pool: SqlitePool) -> TestServer {
    full_server(create_state_with_cache(pool, Arc::new(MemoryCache::new(100))))
}

pub fn valid_payload() -> Value {
    json!({
        "name": "Test Hospital",
        "address": "123 Test St",
        "phone": "1234567890",
        "capacity": 100
    })
}

pub async fn insert_hospital(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO hospitals (name, address, phone, capacity, created_at)
         VALUES (?, '1 Main St', '1234567890', 10, '2026-01-01T00:00:00Z')
         RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_hospitals(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM hospitals")
        .fetch_one(pool)
        .await
        .unwrap()
}
