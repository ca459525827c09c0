//! # Segment serialization
//!
//! The header and payload segments of a token are flat JSON objects of string
//! values, encoded as unpadded base64url. Both [`Header`](crate::Header) and
//! [`Claims`](crate::Claims) are backed by ordered maps, so the JSON text always
//! lists keys in lexicographic order and encoding the same data twice yields
//! byte-identical segments.

use crate::error::Error;
use crate::utils::{base64url_decode, base64url_encode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a value to compact JSON and encode it as an unpadded base64url segment
///
/// # Example
///
/// ```
/// use jwt_lite::codec::encode_segment;
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("iss".to_string(), "test".to_string());
///
/// assert_eq!(encode_segment(&map).unwrap(), "eyJpc3MiOiJ0ZXN0In0");
/// ```
pub fn encode_segment<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let json = serde_json::to_vec(value)?;
    base64url_encode(&json)
}

/// Decode an unpadded base64url segment and parse its JSON content
///
/// Fails with [`Error::Decode`] if the segment is not valid base64url or if the
/// JSON does not match `T`. For the flat string maps used by this library that
/// includes nested objects, arrays, numbers, booleans and `null` values.
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, Error> {
    let json = base64url_decode(segment)?;
    serde_json::from_slice(&json).map_err(|e| Error::Decode(format!("invalid JSON segment: {e}")))
}
