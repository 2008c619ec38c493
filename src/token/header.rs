//! Credential header: algorithm identifier.
//! Used by: token::sign, token::verify.

use serde::{Deserialize, Serialize};

/// The only algorithm this gate signs or accepts. Anything else in a
/// presented header (including `none`) is rejected outright.
pub const ALG_HS256: &str = "HS256";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Header {
    pub fn hs256() -> Self {
        Self { alg: ALG_HS256.into(), typ: "JWT".into() }
    }
}
