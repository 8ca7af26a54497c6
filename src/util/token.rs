//! Unverified decoding of the bearer token's payload segment.
//!
//! TRADE-OFFS
//! ==========
//! This is a convenience decode for display/fallback fields only, never a
//! trust decision: the signature is not checked and the claims are not used
//! for authorization. The server re-validates the token on every authorized
//! request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::TokenClaims;

/// Decode the payload of a three-part dot-delimited token.
/// Returns `None` for anything malformed.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    serde_json::from_slice(&payload).ok()
}
