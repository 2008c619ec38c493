//! Credential creation, signing, and verification.
//! Used by: auth, handlers, state.

pub mod claims;
pub mod header;
pub mod sign;
pub mod verify;
