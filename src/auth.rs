//! Bearer-credential gate for protected operations.
//! Used by: handlers::protected.

use axum::http::{header, HeaderMap};

use crate::config::SigningSecret;
use crate::error::{Error, Result};
use crate::token::claims::Claims;
use crate::token::verify::verify_token;

/// Extracts the credential from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(Error::MissingCredential)
}

/// Runs `op` with the verified claims, or short-circuits with the specific
/// verification failure. `op` is never invoked unless the presented
/// credential passes every check.
pub fn guard<T>(
    headers: &HeaderMap,
    secret: &SigningSecret,
    op: impl FnOnce(Claims) -> T,
) -> Result<T> {
    let claims = verify_token(bearer_token(headers)?, secret)?;
    Ok(op(claims))
}
