//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, cache selection, and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache, RedisCache};
use crate::infrastructure::persistence::{self, PoolSettings};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Response cache (memory, Redis, or disabled)
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let settings = PoolSettings {
        max_connections: config.db_max_connections,
        connect_timeout: Duration::from_secs(config.db_connect_timeout),
    };
    let pool = persistence::connect(&config.database_url, &settings).await?;
    tracing::info!("Connected to database");

    persistence::migrate(&pool).await?;

    let cache = build_cache(&config).await;
    if !cache.health_check().await {
        tracing::warn!(backend = cache.backend(), "Cache backend unhealthy, reads will miss");
    }

    let state = AppState::new(Arc::new(pool), cache, config.docs_path.clone());

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Selects the response cache backend.
///
/// Redis connection failures fall back to the in-memory cache.
async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    if !config.cache_enabled {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    }

    if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory cache.", e);
            }
        }
    }

    tracing::info!("Cache enabled (in-memory)");
    Arc::new(MemoryCache::new(config.cache_max_entries))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
