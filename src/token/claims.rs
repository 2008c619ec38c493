//! Identity and expiry claims embedded in a credential payload.
//! Used by: token::sign, token::verify, handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub iat: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub exp: DateTime<Utc>,
}

impl Claims {
    pub fn new(sub: String, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            sub,
            iat: now,
            exp: now + chrono::Duration::seconds(ttl_seconds),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.exp
    }
}
