//! Process configuration: signing secret, token TTL, bind address.
//! Used by: main, state.

use crate::error::{Error, Result};

/// Shared symmetric key used for both signing and verification.
///
/// Constructed explicitly and passed into the issuer and verifier rather
/// than read from ambient global state, so tests can use distinct secrets.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::Config("signing secret must not be empty".into()));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print key material
        f.write_str("SigningSecret(..)")
    }
}

pub struct Config {
    pub secret: SigningSecret,
    pub token_ttl_seconds: i64,
    pub bind_addr: String,
}

impl Config {
    /// Reads configuration once at startup. A missing or empty
    /// `TOKEN_SECRET` is fatal: the process refuses to start.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var("TOKEN_SECRET")
            .map_err(|_| Error::Config("TOKEN_SECRET is not set".into()))?;
        let secret = SigningSecret::new(raw.into_bytes())?;

        let token_ttl_seconds = match std::env::var("TOKEN_TTL_SECONDS") {
            Ok(v) => parse_ttl(&v)?,
            Err(_) => DEFAULT_TTL_SECONDS,
        };

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

        Ok(Self { secret, token_ttl_seconds, bind_addr })
    }
}

pub const DEFAULT_TTL_SECONDS: i64 = 300;

/// One year. Bounds the TTL so expiry arithmetic can never overflow.
pub const MAX_TTL_SECONDS: i64 = 31_536_000;

fn parse_ttl(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|ttl| (1..=MAX_TTL_SECONDS).contains(ttl))
        .ok_or_else(|| {
            Error::Config(format!(
                "TOKEN_TTL_SECONDS must be an integer between 1 and {}",
                MAX_TTL_SECONDS
            ))
        })
}
