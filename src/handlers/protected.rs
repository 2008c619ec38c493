//! Protected greeting endpoint behind the credential gate.
//! Used by: server.

use axum::extract::State;
use axum::http::HeaderMap;

use crate::auth::guard;
use crate::error::Result;
use crate::state::AppState;

pub async fn protected(State(state): State<AppState>, headers: HeaderMap) -> Result<String> {
    match guard(&headers, &state.secret, |claims| claims.sub) {
        Ok(identity) => {
            tracing::info!(identity = %identity, "credential accepted");
            state.metrics.record_verify();
            Ok(format!("Hello, {}!", identity))
        }
        Err(err) => {
            tracing::info!(error = %err, "credential rejected");
            state.metrics.record_reject();
            Err(err)
        }
    }
}
