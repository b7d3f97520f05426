//! Shopify webhook signature verification.
//!
//! Shopify signs each webhook delivery with HMAC-SHA256 over the raw request
//! body and sends the digest base64-encoded in the `x-shopify-hmac-sha256`
//! header. Verification must run on the raw bytes before any JSON parsing.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verify a base64-encoded HMAC-SHA256 signature over `body`.
///
/// Returns `false` for malformed base64 as well as digest mismatches. The
/// digest comparison is constant-time via `Mac::verify_slice`.
pub fn verify(secret: &str, body: &[u8], provided_base64: &str) -> bool {
    let Ok(provided) = BASE64.decode(provided_base64) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&provided).is_ok()
}

/// Compute the base64 signature for a body. Used by tests and could back an
/// outbound delivery signer.
pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(body);
    BASE64.encode(mac.finalize().into_bytes())
}
