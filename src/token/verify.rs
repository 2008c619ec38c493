//! HMAC-SHA256 credential verification.
//! Used by: auth.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use subtle::ConstantTimeEq;

use crate::config::SigningSecret;
use crate::error::{Error, Result};
use crate::token::claims::Claims;
use crate::token::header::{Header, ALG_HS256};
use crate::token::sign::signature_bytes;

/// Checks structure, algorithm, signature, and expiry, in that order, and
/// returns the embedded claims. The payload is only decoded after the
/// signature has been authenticated.
pub fn verify_token(token: &str, secret: &SigningSecret) -> Result<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    let (header_b64, payload_b64, sig_b64) = match segments.as_slice() {
        [h, p, s] => (*h, *p, *s),
        _ => return Err(Error::MalformedToken("expected three segments".into())),
    };

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header_b64)
        .map_err(|e| Error::MalformedToken(e.to_string()))?;
    let header: Header = serde_json::from_slice(&header_bytes)
        .map_err(|e| Error::MalformedToken(e.to_string()))?;
    if header.alg != ALG_HS256 {
        return Err(Error::UnsupportedAlgorithm(header.alg));
    }

    let presented = URL_SAFE_NO_PAD
        .decode(sig_b64)
        .map_err(|e| Error::MalformedToken(e.to_string()))?;
    let signing_input = format!("{}.{}", header_b64, payload_b64);
    let expected = signature_bytes(secret, signing_input.as_bytes())?;
    // constant-time comparison; length mismatch compares unequal
    if !bool::from(expected.as_slice().ct_eq(presented.as_slice())) {
        return Err(Error::InvalidSignature);
    }

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|e| Error::MalformedToken(e.to_string()))?;
    let claims: Claims = serde_json::from_slice(&payload_bytes)
        .map_err(|e| Error::MalformedToken(e.to_string()))?;

    if claims.is_expired() {
        return Err(Error::ExpiredToken);
    }

    Ok(claims)
}
