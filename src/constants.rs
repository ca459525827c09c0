//! # Constants for JSON Web Tokens
//!
//! This module provides the fixed strings used throughout the library: header
//! field names, the token type value, algorithm identifiers and the names of the
//! registered claims.

/// Header field names
pub mod header_keys {
    /// Token type header field
    pub const TYP: &str = "typ";
    /// Signing algorithm header field
    pub const ALG: &str = "alg";
}

/// Value of the `typ` header field for every token issued by this library
pub const JWT_TYPE: &str = "JWT";

/// Algorithm identifiers as they appear in the `alg` header field
pub mod alg_names {
    /// HMAC with SHA-256
    pub const HS256: &str = "HS256";
    /// HMAC with SHA-384
    pub const HS384: &str = "HS384";
    /// HMAC with SHA-512
    pub const HS512: &str = "HS512";
}

/// Registered claim names (RFC 7519 section 4.1).
///
/// These are names only. The library attaches no semantics to them: an `exp`
/// claim is a string like any other and is never checked against the clock.
pub mod claim_keys {
    /// Issuer
    pub const ISS: &str = "iss";
    /// Subject
    pub const SUB: &str = "sub";
    /// Audience
    pub const AUD: &str = "aud";
    /// Expiration time
    pub const EXP: &str = "exp";
    /// Not before
    pub const NBF: &str = "nbf";
    /// Issued at
    pub const IAT: &str = "iat";
    /// JWT ID
    pub const JTI: &str = "jti";
}

/// Character separating the three token segments
pub const SEGMENT_SEPARATOR: char = '.';
