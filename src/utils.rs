//! Utility functions for JSON Web Tokens

use crate::error::Error;
use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};

/// Compute HMAC-SHA256
pub fn compute_hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    hmac_sha256::HMAC::mac(data, key)
}

/// Compute HMAC-SHA384
pub fn compute_hmac_sha384(key: &[u8], data: &[u8]) -> [u8; 48] {
    hmac_sha512::sha384::HMAC::mac(data, key)
}

/// Compute HMAC-SHA512
pub fn compute_hmac_sha512(key: &[u8], data: &[u8]) -> [u8; 64] {
    hmac_sha512::HMAC::mac(data, key)
}

/// Encode bytes as base64url without padding (RFC 4648 section 5)
pub fn base64url_encode(data: &[u8]) -> Result<String, Error> {
    Base64UrlSafeNoPadding::encode_to_string(data)
        .map_err(|e| Error::Encode(format!("base64url encoding failed: {e:?}")))
}

/// Decode unpadded base64url text
///
/// Padding characters and characters outside the URL-safe alphabet are rejected.
pub fn base64url_decode(text: &str) -> Result<Vec<u8>, Error> {
    Base64UrlSafeNoPadding::decode_to_vec(text, None)
        .map_err(|e| Error::Decode(format!("invalid base64url segment: {e:?}")))
}

/// Compare two byte strings in constant time
///
/// The running time depends on the lengths only, never on where the inputs differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    ct_codecs::verify(a, b)
}
