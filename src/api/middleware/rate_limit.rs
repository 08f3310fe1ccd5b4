//! Per-client rate limiting using the GCRA token bucket from `governor`.
//!
//! Limits are keyed by the peer socket address. Each layer instance owns its
//! own limiter state, so every route group is counted separately.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

use crate::error::AppError;

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// A request quota: `requests` per `window`, in governor's sense.
///
/// A client may burst `requests` at once, then earns one request back every
/// `window / requests`. Over any span of length `window` a steady client can
/// therefore get up to `2 * requests - 1` through, unlike a fixed calendar
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    pub requests: u32,
    pub window: Duration,
}

impl Quota {
    pub const fn per_minute(requests: u32) -> Self {
        Self {
            requests,
            window: Duration::from_secs(60),
        }
    }

    pub const fn per_hour(requests: u32) -> Self {
        Self {
            requests,
            window: Duration::from_secs(60 * 60),
        }
    }

    pub const fn per_day(requests: u32) -> Self {
        Self {
            requests,
            window: Duration::from_secs(24 * 60 * 60),
        }
    }

    /// Interval after which one more request is granted.
    pub fn replenish_period(&self) -> Duration {
        self.window / self.requests.max(1)
    }
}

/// Mutating endpoints (POST, PUT, DELETE).
pub const WRITE_QUOTA: Quota = Quota::per_minute(10);
/// Read endpoints (hospital reads and docs).
pub const READ_QUOTA: Quota = Quota::per_minute(30);
/// Site-wide ceilings applied to every route.
pub const HOURLY_QUOTA: Quota = Quota::per_hour(50);
pub const DAILY_QUOTA: Quota = Quota::per_day(200);

/// Builds a limiter allowing a burst of `quota.requests`, refilled evenly over
/// `quota.window`.
///
/// Requests exceeding the limit receive `429 Too Many Requests`; pair with
/// [`json_rejection`] to render them in the API error shape.
pub fn layer(quota: Quota) -> RateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(quota.replenish_period())
            .burst_size(quota.requests)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Limiter for mutating endpoints: 10 requests per minute.
pub fn write_layer() -> RateLimitLayer {
    layer(WRITE_QUOTA)
}

/// Limiter for read endpoints: 30 requests per minute.
pub fn read_layer() -> RateLimitLayer {
    layer(READ_QUOTA)
}

/// Site-wide hourly ceiling: 50 requests per hour.
pub fn hourly_layer() -> RateLimitLayer {
    layer(HOURLY_QUOTA)
}

/// Site-wide daily ceiling: 200 requests per day.
pub fn daily_layer() -> RateLimitLayer {
    layer(DAILY_QUOTA)
}

/// Rewrites governor's plain-text 429 into the JSON error body, keeping the
/// `retry-after` and `x-ratelimit-after` hints.
///
/// Use with [`axum::middleware::map_response`] outside all rate limit layers.
pub async fn json_rejection(response: Response) -> Response {
    if response.status() != StatusCode::TOO_MANY_REQUESTS {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }

    let retry_after = response.headers().get(header::RETRY_AFTER).cloned();
    let ratelimit_after = response.headers().get("x-ratelimit-after").cloned();

    let message = match retry_after.as_ref().and_then(|v| v.to_str().ok()) {
        Some(secs) => format!("Too many requests, retry after {}s", secs),
        None => "Too many requests".to_string(),
    };

    tracing::warn!(%message, "Rate limit exceeded");

    let mut rendered = AppError::rate_limited(message).into_response();
    if let Some(v) = retry_after {
        rendered.headers_mut().insert(header::RETRY_AFTER, v);
    }
    if let Some(v) = ratelimit_after {
        rendered.headers_mut().insert("x-ratelimit-after", v);
    }
    rendered
}
