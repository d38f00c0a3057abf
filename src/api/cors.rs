//! CORS handling for the single allowed browser origin.
//!
//! Two middleware functions:
//! - `preflight` answers `OPTIONS` under `/api/` with an empty 204
//! - `apply_cors_headers` decorates every response whose request came from
//!   `ALLOWED_ORIGIN`; other origins get no CORS headers at all

use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// The static front end allowed to call the API from the browser.
pub const ALLOWED_ORIGIN: &str = "https://somauma.github.io";
pub const ALLOWED_METHODS: &str = "GET,POST,DELETE,OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, X-Admin-Password";

const API_PREFIX: &str = "/api/";

pub async fn preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS && req.uri().path().starts_with(API_PREFIX) {
        return StatusCode::NO_CONTENT.into_response();
    }
    next.run(req).await
}

pub async fn apply_cors_headers(req: Request, next: Next) -> Response {
    let allowed = is_allowed_origin(req.headers());
    let mut response = next.run(req).await;

    if allowed {
        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOWED_ORIGIN),
        );
        headers.insert(header::VARY, HeaderValue::from_static("Origin"));
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }

    response
}

/// Exact, case-sensitive match on the `Origin` header.
pub fn is_allowed_origin(headers: &HeaderMap) -> bool {
    headers
        .get(header::ORIGIN)
        .map(|o| o.as_bytes() == ALLOWED_ORIGIN.as_bytes())
        .unwrap_or(false)
}
