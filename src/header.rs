//! # Header Types for JSON Web Tokens
//!
//! This module provides the header structure and the HMAC algorithm identifiers.
//!
//! Every token issued by this library carries a header with exactly two fields:
//!
//! - **Type (typ)**: always `"JWT"`.
//! - **Algorithm (alg)**: the identifier reported by the signer that produced the token.
//!
//! The header is fixed when a [`Token`](crate::Token) is created and cannot be
//! changed afterwards.

use crate::constants::{alg_names, header_keys, JWT_TYPE};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// HMAC algorithms implemented by [`HmacSigner`](crate::HmacSigner).
///
/// # Example
///
/// ```
/// use jwt_lite::Algorithm;
///
/// let alg = Algorithm::Hs256;
/// assert_eq!(alg.name(), "HS256");
/// assert_eq!(Algorithm::from_name("HS512"), Some(Algorithm::Hs512));
/// assert!("none".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC with SHA-256
    Hs256,
    /// HMAC with SHA-384
    Hs384,
    /// HMAC with SHA-512
    Hs512,
}

impl Algorithm {
    /// Get the identifier written to the `alg` header field
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Hs256 => alg_names::HS256,
            Algorithm::Hs384 => alg_names::HS384,
            Algorithm::Hs512 => alg_names::HS512,
        }
    }

    /// Create an Algorithm from its identifier
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            alg_names::HS256 => Some(Algorithm::Hs256),
            alg_names::HS384 => Some(Algorithm::Hs384),
            alg_names::HS512 => Some(Algorithm::Hs512),
            _ => None,
        }
    }

    /// Length of the raw MAC in bytes
    pub fn signature_len(&self) -> usize {
        match self {
            Algorithm::Hs256 => 32,
            Algorithm::Hs384 => 48,
            Algorithm::Hs512 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s).ok_or_else(|| Error::InvalidAlgorithm(s.to_string()))
    }
}

/// Header for a JSON Web Token.
///
/// Serializes as a flat JSON object, e.g. `{"alg":"HS256","typ":"JWT"}`.
///
/// # Example
///
/// ```
/// use jwt_lite::Header;
///
/// let header = Header::new("HS256");
/// assert_eq!(header.typ(), Some("JWT"));
/// assert_eq!(header.alg(), Some("HS256"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header {
    fields: BTreeMap<String, String>,
}

impl Header {
    /// Creates a header with `typ` set to `"JWT"` and `alg` set to `alg`
    pub fn new<S: Into<String>>(alg: S) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(header_keys::TYP.to_string(), JWT_TYPE.to_string());
        fields.insert(header_keys::ALG.to_string(), alg.into());
        Self { fields }
    }

    /// Builds a header from decoded fields, as found in a received token.
    ///
    /// No field is required; a received header is informational only.
    pub fn from_map(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Gets the `typ` field
    pub fn typ(&self) -> Option<&str> {
        self.get(header_keys::TYP)
    }

    /// Gets the `alg` field
    pub fn alg(&self) -> Option<&str> {
        self.get(header_keys::ALG)
    }

    /// Gets any header field by name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns a copy of the header fields
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.fields.clone()
    }

    /// Number of header fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the header has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
