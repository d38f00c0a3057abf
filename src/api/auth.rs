//! Shared-secret authorization for write endpoints.

use axum::http::HeaderMap;

use crate::error::AppError;

/// Request header carrying the admin password in plaintext.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// A request is authorized only when a secret is configured and the header
/// matches it exactly. No configured secret means nothing is authorized.
pub fn is_authorized(headers: &HeaderMap, expected: Option<&str>) -> bool {
    let Some(expected) = expected.filter(|e| !e.is_empty()) else {
        return false;
    };

    headers
        .get(ADMIN_PASSWORD_HEADER)
        .map(|v| v.as_bytes() == expected.as_bytes())
        .unwrap_or(false)
}

/// Reject the request with `AppError::Unauthorized` unless it is authorized.
pub fn require_admin(headers: &HeaderMap, expected: Option<&str>) -> Result<(), AppError> {
    if is_authorized(headers, expected) {
        Ok(())
    } else {
        tracing::warn!("rejected write with missing or invalid admin password");
        Err(AppError::Unauthorized("Senha inválida.".into()))
    }
}
