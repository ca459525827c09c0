//! # JSON Web Tokens
//!
//! A small library for issuing and verifying compact signed tokens of the form
//! `header.payload.signature`, where each segment is unpadded base64url text.
//!
//! ## Overview
//!
//! A [`Token`] holds a fixed header (`typ = "JWT"`, `alg` taken from its signer),
//! a flat set of string claims, and a reference to a [`Signer`]. Calling
//! [`Token::generate`] serializes the header and claims as JSON, encodes them and
//! appends the signature over `"<header>.<payload>"`. The receiving side calls
//! [`verify`] with its own signer, which recomputes the signature over the
//! received segments and compares it in constant time.
//!
//! ## Features
//!
//! - Pluggable signing through the [`Signer`] trait
//! - HMAC-SHA256, HMAC-SHA384 and HMAC-SHA512 via [`HmacSigner`]
//! - Deterministic output: generating an unchanged token twice gives the same string
//! - Verification never trusts the token's own `alg` field
//! - Unverified inspection of header and claims via [`decode`]
//!
//! Claims are string-to-string only. Expiry, audience and issuer are not
//! interpreted; callers that need such checks read the claims after verification.
//!
//! ## Basic Example
//!
//! ```rust
//! use jwt_lite::{decode, verify, HmacSigner, Token};
//! use jwt_lite::claims::keys;
//!
//! // The same key is used for signing and verification
//! let signer = HmacSigner::hs256(b"my-secret-key-for-hmac-sha256".to_vec());
//!
//! // Create a token
//! let mut token = Token::new(&signer);
//! token.set_claim(keys::ISS, "example-issuer");
//! token.set_claim(keys::SUB, "user-123");
//!
//! let encoded = token.generate().expect("Failed to generate token");
//! assert_eq!(encoded.split('.').count(), 3);
//!
//! // Verify the signature
//! assert!(verify(&encoded, &signer).expect("Malformed token"));
//!
//! // Read the claims
//! let decoded = decode(&encoded).expect("Failed to decode token");
//! assert_eq!(decoded.claim(keys::SUB), Some("user-123"));
//! ```

pub mod claims;
pub mod codec;
pub mod constants;
pub mod error;
pub mod header;
pub mod signer;
pub mod token;
pub mod utils;

pub use claims::{Claims, ClaimsMap};
pub use constants::{alg_names, claim_keys, header_keys, JWT_TYPE};
pub use error::Error;
pub use header::{Algorithm, Header};
pub use signer::{HmacSigner, Signer};
pub use token::{decode, verify, DecodedToken, Token};
