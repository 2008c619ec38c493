//! HMAC-SHA256 credential issuance.
//! Used by: handlers::login.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::SigningSecret;
use crate::error::{Error, Result};
use crate::token::claims::Claims;
use crate::token::header::Header;

type HmacSha256 = Hmac<Sha256>;

/// Issues a signed, time-bounded credential for `identity`.
///
/// Stateless: nothing is persisted server-side. The caller is expected to
/// have established the identity before calling this.
pub fn issue(identity: &str, secret: &SigningSecret, ttl_seconds: i64) -> Result<String> {
    if identity.is_empty() {
        return Err(Error::Validation("identity must not be empty".into()));
    }
    sign_token(&Claims::new(identity.to_string(), ttl_seconds), secret)
}

pub fn sign_token(claims: &Claims, secret: &SigningSecret) -> Result<String> {
    let encoded_header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&Header::hs256())?);
    let encoded_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
    let signing_input = format!("{}.{}", encoded_header, encoded_payload);
    let tag = signature_bytes(secret, signing_input.as_bytes())?;
    Ok(format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(tag)))
}

/// HMAC tag over the `header.payload` signing input. Shared with the
/// verifier so both sides compute the signature identically.
pub(crate) fn signature_bytes(secret: &SigningSecret, signing_input: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::Signing(e.to_string()))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SigningSecret {
        SigningSecret::new(b"test-secret".to_vec()).unwrap()
    }

    #[test]
    fn issued_token_has_three_segments() -> Result<()> {
        let token = issue("username", &secret(), 300)?;
        assert_eq!(token.split('.').count(), 3);
        Ok(())
    }

    #[test]
    fn empty_identity_rejected() {
        let result = issue("", &secret(), 300);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn header_segment_declares_hs256() -> Result<()> {
        let token = issue("username", &secret(), 300)?;
        let header_b64 = token.split('.').next().unwrap();
        let header: Header =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(header_b64).unwrap())?;
        assert_eq!(header, Header::hs256());
        Ok(())
    }

    #[test]
    fn signing_is_deterministic_for_fixed_claims() -> Result<()> {
        let claims = Claims::new("username".into(), 300);
        let a = sign_token(&claims, &secret())?;
        let b = sign_token(&claims, &secret())?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn distinct_secrets_produce_distinct_signatures() -> Result<()> {
        let claims = Claims::new("username".into(), 300);
        let a = sign_token(&claims, &secret())?;
        let b = sign_token(&claims, &SigningSecret::new(b"other-secret".to_vec())?)?;
        assert_ne!(a, b);
        Ok(())
    }
}
