//! Unified error types for tokengate.
//! Used by: config, token, auth, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token expired")]
    ExpiredToken,

    #[error("missing credential")]
    MissingCredential,

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("signing error: {0}")]
    Signing(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::MalformedToken(_)
            | Error::InvalidSignature
            | Error::ExpiredToken
            | Error::MissingCredential
            | Error::UnsupportedAlgorithm(_) => StatusCode::UNAUTHORIZED,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Serialization(_) | Error::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
