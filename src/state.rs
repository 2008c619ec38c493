//! Shared application state.

use std::sync::Arc;

use crate::config::{Config, SigningSecret, DEFAULT_TTL_SECONDS};
use crate::error::Result;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub secret: SigningSecret,
    pub token_ttl_seconds: i64,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state(config: &Config) -> AppState {
    Arc::new(AppStateInner {
        secret: config.secret.clone(),
        token_ttl_seconds: config.token_ttl_seconds,
        metrics: Metrics::new(),
    })
}

pub fn build_test_state() -> Result<AppState> {
    Ok(Arc::new(AppStateInner {
        secret: SigningSecret::new(b"test-secret".to_vec())?,
        token_ttl_seconds: DEFAULT_TTL_SECONDS,
        metrics: Metrics::new(),
    }))
}
