//! Credential issuance endpoint with input validation.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::token::sign::issue;

#[derive(Deserialize)]
pub struct LoginRequest {
    // The original service issued for this fixed identity regardless of
    // request content; what credential check was intended is unknown, so
    // none is performed here and the identity simply defaults.
    #[serde(default = "default_username")]
    pub username: String,
}

fn default_username() -> String {
    "username".into()
}

impl Default for LoginRequest {
    fn default() -> Self {
        Self { username: default_username() }
    }
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

fn validate_request(req: &LoginRequest) -> Result<()> {
    if req.username.is_empty() || req.username.len() > 256 {
        return Err(Error::Validation("username must be 1-256 characters".into()));
    }
    if req.username.chars().any(|c| c.is_control()) {
        return Err(Error::Validation("username contains control characters".into()));
    }
    Ok(())
}

// The body is optional: the original service issued its fixed-identity
// token no matter what the request carried, so a missing or non-JSON body
// falls back to the default rather than failing extraction.
pub async fn login(
    State(state): State<AppState>,
    body: Option<Json<LoginRequest>>,
) -> Result<Json<LoginResponse>> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    validate_request(&req)?;
    let access_token = issue(&req.username, &state.secret, state.token_ttl_seconds)?;
    tracing::info!(username = %req.username, "token issued");
    state.metrics.record_issue();
    Ok(Json(LoginResponse { access_token }))
}
