use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Request logging middleware. Health checks are not logged; everything else
/// gets one line at a level matching the status class.
pub async fn request_logging(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_string();

    if path == "/health" {
        return next.run(req).await;
    }

    let method = req.method().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();

    match status {
        500.. => error!(method, path, status, elapsed_ms, "request"),
        400..=499 => warn!(method, path, status, elapsed_ms, "request"),
        _ => info!(method, path, status, elapsed_ms, "request"),
    }

    response
}
