//! Error types for the JSON Web Token library

use thiserror::Error;

/// Errors that can occur when issuing, verifying or inspecting tokens
#[derive(Error, Debug)]
pub enum Error {
    /// Header or claims could not be encoded as JSON
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The token string does not have the `header.payload.signature` shape
    #[error("Invalid token structure: {0}")]
    MalformedToken(String),

    /// Bytes could not be encoded as base64url
    #[error("Base64url encoding error: {0}")]
    Encode(String),

    /// A segment is not valid base64url, or not a flat JSON object of strings
    #[error("Decode error: {0}")]
    Decode(String),

    /// The signer produced an empty signature
    #[error("Signer returned an empty signature. A token must consist of three non-empty segments")]
    EmptySignature,

    /// Unknown algorithm name
    #[error("Invalid algorithm: {0}")]
    InvalidAlgorithm(String),
}
