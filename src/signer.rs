//! # Signers
//!
//! A [`Signer`] names a signing algorithm and computes a deterministic, keyed
//! signature over the encoded header and payload of a token. Token generation and
//! verification depend only on this trait, never on a concrete primitive.
//!
//! [`HmacSigner`] implements the HMAC family (HS256, HS384 and HS512). Any other
//! algorithm, or a test double, can be plugged in by implementing the trait.

use crate::header::Algorithm;
use crate::utils::{
    base64url_encode, compute_hmac_sha256, compute_hmac_sha384, compute_hmac_sha512,
};
use std::fmt;
use std::sync::Arc;
use zeroize::Zeroize;

/// Signing capability consumed by [`Token`](crate::Token) and [`verify`](crate::verify).
///
/// Implementations must be deterministic: the same key, header and payload always
/// produce the same signature. The verifier always supplies its own signer, so the
/// `alg` field carried inside a token never selects the algorithm.
///
/// # Example
///
/// ```
/// use jwt_lite::{verify, Signer, Token};
///
/// /// Test double that "signs" by concatenating its inputs
/// struct Concat;
///
/// impl Signer for Concat {
///     fn alg(&self) -> &str {
///         "MOCK"
///     }
///
///     fn sign(&self, header_b64: &str, payload_b64: &str) -> String {
///         format!("{header_b64}{payload_b64}")
///     }
/// }
///
/// let signer = Concat;
/// let token = Token::new(&signer).with_claim("iss", "test").generate().unwrap();
/// assert!(verify(&token, &signer).unwrap());
/// ```
pub trait Signer: Send + Sync {
    /// Algorithm identifier written to the `alg` header field, e.g. `"HS256"`
    fn alg(&self) -> &str;

    /// Sign `"<header_b64>.<payload_b64>"` and return the signature as unpadded base64url
    fn sign(&self, header_b64: &str, payload_b64: &str) -> String;
}

impl<T: Signer + ?Sized> Signer for &T {
    fn alg(&self) -> &str {
        (**self).alg()
    }

    fn sign(&self, header_b64: &str, payload_b64: &str) -> String {
        (**self).sign(header_b64, payload_b64)
    }
}

impl<T: Signer + ?Sized> Signer for Box<T> {
    fn alg(&self) -> &str {
        (**self).alg()
    }

    fn sign(&self, header_b64: &str, payload_b64: &str) -> String {
        (**self).sign(header_b64, payload_b64)
    }
}

impl<T: Signer + ?Sized> Signer for Arc<T> {
    fn alg(&self) -> &str {
        (**self).alg()
    }

    fn sign(&self, header_b64: &str, payload_b64: &str) -> String {
        (**self).sign(header_b64, payload_b64)
    }
}

/// HMAC signer holding a shared secret.
///
/// The key is owned by the signer, zeroized when the signer is dropped and never
/// printed by its `Debug` implementation. A signer can be shared between threads;
/// every call to [`Signer::sign`] runs a fresh HMAC computation.
///
/// # Examples
///
/// ```
/// use jwt_lite::{Algorithm, HmacSigner, Signer};
///
/// let signer = HmacSigner::hs256(b"secret".to_vec());
/// assert_eq!(signer.alg(), "HS256");
/// assert_eq!(
///     signer.sign("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9", "eyJpc3MiOiJ0ZXN0In0"),
///     "pn3OUMwVAKuw0TVsC9g6dyXghfYYtkWyW788B4y-9U0"
/// );
///
/// let signer = HmacSigner::new(Algorithm::Hs512, "another-secret");
/// assert_eq!(signer.algorithm(), Algorithm::Hs512);
/// ```
#[derive(Clone)]
pub struct HmacSigner {
    algorithm: Algorithm,
    key: Vec<u8>,
}

impl HmacSigner {
    /// Create a signer for the given HMAC algorithm and secret key
    pub fn new<K: Into<Vec<u8>>>(algorithm: Algorithm, key: K) -> Self {
        Self {
            algorithm,
            key: key.into(),
        }
    }

    /// Create an HMAC-SHA256 (`HS256`) signer
    pub fn hs256<K: Into<Vec<u8>>>(key: K) -> Self {
        Self::new(Algorithm::Hs256, key)
    }

    /// Create an HMAC-SHA384 (`HS384`) signer
    pub fn hs384<K: Into<Vec<u8>>>(key: K) -> Self {
        Self::new(Algorithm::Hs384, key)
    }

    /// Create an HMAC-SHA512 (`HS512`) signer
    pub fn hs512<K: Into<Vec<u8>>>(key: K) -> Self {
        Self::new(Algorithm::Hs512, key)
    }

    /// The HMAC algorithm used by this signer
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn mac(&self, data: &[u8]) -> Vec<u8> {
        match self.algorithm {
            Algorithm::Hs256 => compute_hmac_sha256(&self.key, data).to_vec(),
            Algorithm::Hs384 => compute_hmac_sha384(&self.key, data).to_vec(),
            Algorithm::Hs512 => compute_hmac_sha512(&self.key, data).to_vec(),
        }
    }
}

impl Signer for HmacSigner {
    fn alg(&self) -> &str {
        self.algorithm.name()
    }

    fn sign(&self, header_b64: &str, payload_b64: &str) -> String {
        let signing_input = format!("{header_b64}.{payload_b64}");
        let mac = self.mac(signing_input.as_bytes());

        // An empty signature is rejected by `Token::generate` and never verifies.
        base64url_encode(&mac).unwrap_or_else(|e| {
            tracing::error!(alg = self.algorithm.name(), error = %e, "failed to encode signature");
            String::new()
        })
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("algorithm", &self.algorithm)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl Drop for HmacSigner {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}
