//! Response cache middleware for GET routes.

use axum::{
    body::{Body, HttpBody, to_bytes},
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Duration;

use crate::error::AppError;
use crate::infrastructure::cache::{CacheService, CachedResponse};

/// Cache lifetime for hospital reads.
pub const READ_TTL: Duration = Duration::from_secs(60);
/// Cache lifetime for the documentation page.
pub const DOCS_TTL: Duration = Duration::from_secs(300);

/// Largest body that will be buffered for caching.
const MAX_CACHED_BODY: usize = 4 * 1024 * 1024;

pub const CACHE_STATUS_HEADER: &str = "x-cache";

/// Backend and TTL used by one route group.
#[derive(Clone)]
pub struct CachePolicy {
    cache: Arc<dyn CacheService>,
    ttl: Duration,
}

impl CachePolicy {
    pub fn new(cache: Arc<dyn CacheService>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }
}

/// Cache key for a GET of `path`. Query strings are not part of the key; no
/// cached route reads them.
pub fn cache_key(path: &str) -> String {
    format!("GET {}", path)
}

/// Serves GET requests from cache when possible and stores fresh 200 responses.
///
/// Responses are tagged `x-cache: HIT` or `x-cache: MISS`. Non-GET requests
/// and non-200 responses pass through untouched. Bodies over 4 MiB, or of
/// unknown length, are streamed through uncached.
///
/// # Example
///
/// ```rust,ignore
/// let reads = Router::new()
///     .route("/api/hospitals", get(list_hospitals_handler))
///     .route_layer(middleware::from_fn_with_state(
///         CachePolicy::new(cache, READ_TTL),
///         cache::layer,
///     ));
/// ```
pub async fn layer(State(policy): State<CachePolicy>, req: Request, next: Next) -> Response {
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    let key = cache_key(req.uri().path());

    match policy.cache.get(&key).await {
        Ok(Some(hit)) => return replay(hit),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, key, "Cache lookup failed"),
    }

    let response = next.run(req).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    parts
        .headers
        .insert(CACHE_STATUS_HEADER, HeaderValue::from_static("MISS"));

    if !fits_in_cache(&body) {
        tracing::debug!(key, "Response too large to cache");
        return Response::from_parts(parts, body);
    }

    let bytes = match to_bytes(body, MAX_CACHED_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, key, "Failed to buffer response body");
            return AppError::internal("Failed to read response body").into_response();
        }
    };

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    if let Ok(text) = std::str::from_utf8(&bytes) {
        let entry = CachedResponse {
            content_type,
            body: text.to_string(),
        };
        if let Err(e) = policy.cache.set(&key, &entry, policy.ttl).await {
            tracing::warn!(error = %e, key, "Cache store failed");
        }
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn fits_in_cache(body: &Body) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_CACHED_BODY as u64)
}

fn replay(hit: CachedResponse) -> Response {
    let mut response = Response::new(Body::from(hit.body));
    if let Ok(ct) = HeaderValue::from_str(&hit.content_type) {
        response.headers_mut().insert(header::CONTENT_TYPE, ct);
    }
    response
        .headers_mut()
        .insert(CACHE_STATUS_HEADER, HeaderValue::from_static("HIT"));
    response
}

/// Drops cached reads made stale by a write to hospital `id` (or to the
/// collection when `id` is `None`).
pub async fn invalidate_hospital(cache: &dyn CacheService, id: Option<i64>) {
    let mut keys = vec![cache_key("/api/hospitals")];
    if let Some(id) = id {
        keys.push(cache_key(&format!("/api/hospitals/{}", id)));
    }

    for key in keys {
        if let Err(e) = cache.invalidate(&key).await {
            tracing::warn!(error = %e, key, "Failed to invalidate cache after write");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("/api/hospitals/7"), "GET /api/hospitals/7");
    }

    #[test]
    fn test_fits_in_cache() {
        assert!(fits_in_cache(&Body::from("[]")));
        assert!(fits_in_cache(&Body::from(vec![b'x'; MAX_CACHED_BODY])));
        assert!(!fits_in_cache(&Body::from(vec![b'x'; MAX_CACHED_BODY + 1])));
    }
}
