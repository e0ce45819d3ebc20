use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{HeaderValue, ORIGIN, VARY};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::protocol::ErrorResponse;

const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

/// Cross-origin access policy, fixed at startup.
pub struct CorsPolicy {
    allowed_origin: Option<String>,
}

impl CorsPolicy {
    pub fn new(allowed_origin: Option<String>) -> Self {
        Self { allowed_origin }
    }

    /// `Access-Control-Allow-Origin` value for a cross-site request, or
    /// `None` when the origin is blocked.
    pub fn allow_origin_value(&self, origin: &str) -> Option<String> {
        match &self.allowed_origin {
            None => Some("*".to_string()),
            Some(allowed) if allowed == origin => Some(origin.to_string()),
            Some(_) => None,
        }
    }
}

/// Origin-check middleware. Requests without an `Origin` header are treated
/// as same-origin and pass through untouched; cross-site requests from any
/// origin other than the configured one are rejected before routing.
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let origin = req
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let Some(origin) = origin else {
        return next.run(req).await;
    };

    let Some(allow_origin) = policy.allow_origin_value(&origin) else {
        warn!(origin, path = req.uri().path(), "blocked cross-origin request");
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("origin not allowed")),
        )
            .into_response();
    };

    if req.method() == Method::OPTIONS {
        return preflight_response(&allow_origin);
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut(), &allow_origin);
    response
}

fn preflight_response(allow_origin: &str) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    apply_cors_headers(response.headers_mut(), allow_origin);
    response
        .headers_mut()
        .insert(ALLOW_METHODS, HeaderValue::from_static("GET, POST"));
    response
        .headers_mut()
        .insert(ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    response
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap, allow_origin: &str) {
    // The origin string came out of a header, so it is a valid header value.
    if let Ok(value) = HeaderValue::from_str(allow_origin) {
        headers.insert(ALLOW_ORIGIN, value);
    }
    headers.insert(VARY, HeaderValue::from_static("Origin"));
}
