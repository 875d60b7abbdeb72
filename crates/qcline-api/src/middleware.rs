//! Router layers shared by every route
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use qcline_core::QCLINE_VERSION;
use tower_http::cors::CorsLayer;

/// Response header carrying the engine version
pub const VERSION_HEADER: &str = "x-qcline-version";

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}

/// Stamp every response with the engine version that produced it
pub async fn engine_version(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(VERSION_HEADER, HeaderValue::from_static(QCLINE_VERSION));
    response
}
