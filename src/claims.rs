//! # Claims for JSON Web Tokens
//!
//! This module provides the claims structure carried in the token payload.
//!
//! Claims are a flat mapping from string names to string values. Numbers,
//! booleans and nested structures are not part of the contract; callers that
//! need them encode them as strings (for example `exp = "1700000000"`).
//! The library attaches no meaning to any claim, including the registered
//! names listed in [`keys`].

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Registered claim names as defined in RFC 7519
pub mod keys {
    use crate::constants::claim_keys;

    /// Issuer claim name
    pub const ISS: &str = claim_keys::ISS;
    /// Subject claim name
    pub const SUB: &str = claim_keys::SUB;
    /// Audience claim name
    pub const AUD: &str = claim_keys::AUD;
    /// Expiration time claim name
    pub const EXP: &str = claim_keys::EXP;
    /// Not before claim name
    pub const NBF: &str = claim_keys::NBF;
    /// Issued at claim name
    pub const IAT: &str = claim_keys::IAT;
    /// JWT ID claim name
    pub const JTI: &str = claim_keys::JTI;
}

/// Type alias for the underlying claims map
pub type ClaimsMap = BTreeMap<String, String>;

/// Token claims.
///
/// Keys are unique; setting an existing key overwrites its value. Empty strings
/// and arbitrary Unicode are accepted for both keys and values.
///
/// # Example
///
/// ```
/// use jwt_lite::claims::{keys, Claims};
///
/// let claims = Claims::new()
///     .with_claim(keys::ISS, "example-issuer")
///     .with_claim(keys::SUB, "user-123");
///
/// assert_eq!(claims.get(keys::ISS), Some("example-issuer"));
/// assert_eq!(claims.get(keys::AUD), None);
/// assert_eq!(claims.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims {
    map: ClaimsMap,
}

impl Claims {
    /// Creates an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a claim
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.map.insert(key.into(), value.into());
    }

    /// Inserts or overwrites a claim, builder style
    pub fn with_claim<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Gets a claim value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Removes a claim, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.map.remove(key)
    }

    /// Whether a claim with this name exists
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Number of claims
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether there are no claims
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over claims in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.map.iter()
    }

    /// Returns a copy of the claims as a map
    pub fn to_map(&self) -> ClaimsMap {
        self.map.clone()
    }

    /// Creates claims from a map
    pub fn from_map(map: ClaimsMap) -> Self {
        Self { map }
    }
}

impl<'a> IntoIterator for &'a Claims {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Claims {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
