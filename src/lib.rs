//! Minimalistic implementation of the [JWA] signing layer used by JSON web
//! signatures ([JWS]), with focus on type safety and secure cryptographic
//! primitives.
//!
//! # Design choices
//!
//! - Algorithm identifiers are parsed once, at construction of a [`Jwa`]
//!   signer / verifier pair, into the fully typed [`Algorithm`] enum.
//!   An unrecognized identifier fails fast with [`InvalidAlgorithm`] before
//!   any cryptographic machinery is configured.
//! - Payloads and key material may arrive as text, raw bytes or structured
//!   JSON values. They are normalized through the [`Input`] sum type, so that
//!   logically equal inputs produce byte-identical signatures regardless of
//!   their surface representation.
//! - Signature verification distinguishes *mismatch* (an ordinary `false`
//!   result) from *ill-formed questions* (absent or unusable key material,
//!   surfaced as errors). HMAC signatures are compared in constant time.
//! - Cryptographic primitives sit behind the [`CryptoBackend`] capability
//!   trait. The default [`RustCrypto`] backend uses pure-Rust implementations;
//!   alternative backends (e.g., hardware-backed) only need to implement the
//!   trait.
//!
//! ## Supported algorithms
//!
//! | Algorithm(s) | Feature | Description |
//! |--------------|---------|-------------|
//! | `HS256`, `HS384`, `HS512` | - | HMAC with pure Rust [`sha2`] crate |
//! | `RS256`, `RS384`, `RS512` | `rsa` | RSASSA-PKCS1-v1_5 via pure Rust [`rsa`] crate with blinding |
//! | `none` | - | Unsecured JWS per [RFC 7515] |
//!
//! # `no_std` support
//!
//! The crate supports a `no_std` compilation mode, controlled by the `std`
//! feature (on by default). Without it, error types do not implement the
//! standard `Error` trait; `alloc` types (`String`, `Vec`, `Cow`) are still
//! used.
//!
//! [JWA]: https://tools.ietf.org/html/rfc7518
//! [JWS]: https://tools.ietf.org/html/rfc7515
//! [RFC 7515]: https://tools.ietf.org/html/rfc7515#appendix-A.5
//! [`sha2`]: https://docs.rs/sha2/
//! [`rsa`]: https://docs.rs/rsa/
//!
//! # Examples
//!
//! Signing and verifying with a shared secret:
//!
//! ```
//! use jwa::{jwa, Input};
//!
//! # fn main() -> anyhow::Result<()> {
//! let algorithm = jwa("HS256")?;
//! let payload = Input::from("eugene mirman");
//! let secret = Input::from("shhhhhhhhhh");
//!
//! let signature = algorithm.sign(&payload, Some(&secret))?;
//! assert!(algorithm.verify(&payload, &signature, Some(&secret))?);
//!
//! // A tampered signature or a wrong secret is an ordinary mismatch...
//! assert!(!algorithm.verify(&payload, "other sig", Some(&secret))?);
//! let wrong = Input::from("incorrect");
//! assert!(!algorithm.verify(&payload, &signature, Some(&wrong))?);
//! // ...while an absent secret is an error.
//! assert!(algorithm.sign(&payload, None).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! Structured payloads canonicalize deterministically:
//!
//! ```
//! use jwa::{Input, Jwa};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let algorithm: Jwa = "hs512".parse()?;
//! let payload = Input::from(json!({ "a": ["whatever", "this", "is"] }));
//! let secret = Input::from("bones");
//!
//! let signature = algorithm.sign(&payload, Some(&secret))?;
//! assert!(algorithm.verify(&payload, &signature, Some(&secret))?);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/jwa/0.1.0")]
#![warn(missing_debug_implementations, missing_docs, bare_trait_objects)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod alg;
mod backend;
mod ct;
mod encoding;
mod error;
mod input;

// Polyfill for `alloc` types.
mod alloc {
    #[cfg(not(feature = "std"))]
    extern crate alloc;

    #[cfg(not(feature = "std"))]
    pub use alloc::{
        borrow::{Cow, ToOwned},
        string::String,
        vec::Vec,
    };
    #[cfg(feature = "std")]
    pub use std::{
        borrow::{Cow, ToOwned},
        string::String,
        vec::Vec,
    };
}

pub use crate::{
    alg::{Algorithm, HashAlg},
    backend::{CryptoBackend, RustCrypto},
    error::{InvalidAlgorithm, SignError, VerifyError},
    input::Input,
};

use core::str::FromStr;

use crate::alloc::String;

/// Signer / verifier pair for a single JWS algorithm.
///
/// The algorithm identifier is validated once, when the pair is constructed;
/// each subsequent [`sign`](Self::sign) or [`verify`](Self::verify) call
/// routes the payload and key material through canonicalization, invokes the
/// cryptographic backend and encodes the result as an unpadded base64url
/// string. A `Jwa` value holds no key material and no mutable state, so it
/// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Jwa<B = RustCrypto> {
    algorithm: Algorithm,
    backend: B,
}

/// Creates a signer / verifier pair for the specified algorithm identifier,
/// using the default [`RustCrypto`] backend.
///
/// The identifier is matched case-insensitively against `HS256` / `HS384` /
/// `HS512` / `RS256` / `RS384` / `RS512` / `none`; anything else (including
/// substrings and superstrings of valid identifiers) fails with
/// [`InvalidAlgorithm`].
pub fn jwa(algorithm: &str) -> Result<Jwa, InvalidAlgorithm> {
    Jwa::new(algorithm)
}

impl Jwa {
    /// Creates a pair for the specified algorithm identifier using the
    /// default [`RustCrypto`] backend. See [`jwa()`] for the identifier
    /// grammar.
    pub fn new(algorithm: &str) -> Result<Self, InvalidAlgorithm> {
        Ok(Self::with_backend(algorithm.parse()?, RustCrypto))
    }
}

impl FromStr for Jwa {
    type Err = InvalidAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<B: CryptoBackend> Jwa<B> {
    /// Creates a pair for an already parsed [`Algorithm`], backed by a custom
    /// [`CryptoBackend`] implementation.
    pub fn with_backend(algorithm: Algorithm, backend: B) -> Self {
        Self { algorithm, backend }
    }

    /// Returns the algorithm this pair was constructed for.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Signs `payload` with the supplied key material.
    ///
    /// `key` is the shared secret for `HS*` algorithms and a PEM-encoded
    /// private key for `RS*` algorithms; it is ignored by `none`. The
    /// returned signature is an unpadded base64url string (empty for
    /// `none`).
    pub fn sign(&self, payload: &Input<'_>, key: Option<&Input<'_>>) -> Result<String, SignError> {
        match self.algorithm {
            Algorithm::Hmac(hash) => alg::hmacs::sign(&self.backend, hash, payload, key),
            #[cfg(feature = "rsa")]
            Algorithm::Rsa(hash) => alg::rsa::sign(&self.backend, hash, payload, key),
            // Unsecured JWS: the signature is defined to be empty.
            Algorithm::None => Ok(String::new()),
        }
    }

    /// Verifies `signature` over `payload` with the supplied key material.
    ///
    /// `key` is the shared secret for `HS*` algorithms and a PEM-encoded
    /// public key for `RS*` algorithms; it is ignored by `none`. A
    /// mismatched or malformed signature yields `Ok(false)`; only absent or
    /// unusable key material is an error.
    pub fn verify(
        &self,
        payload: &Input<'_>,
        signature: &str,
        key: Option<&Input<'_>>,
    ) -> Result<bool, VerifyError> {
        match self.algorithm {
            Algorithm::Hmac(hash) => {
                alg::hmacs::verify(&self.backend, hash, payload, signature, key)
            }
            #[cfg(feature = "rsa")]
            Algorithm::Rsa(hash) => alg::rsa::verify(&self.backend, hash, payload, signature, key),
            // Unsecured JWS carries no integrity protection; only the
            // structural invariant (an empty signature) is checked.
            Algorithm::None => Ok(signature.is_empty()),
        }
    }
}
