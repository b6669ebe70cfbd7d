//! Error handling.

use core::fmt;

use crate::alloc::{String, ToOwned};

/// Error returned when an algorithm identifier is not recognized.
///
/// Raised synchronously at construction of a signer / verifier pair; the
/// identifier must match one of the supported names exactly (ignoring ASCII
/// case), so substrings such as `"rs"` and superstrings such as `"ahs256b"`
/// are rejected.
#[derive(Debug)]
pub struct InvalidAlgorithm {
    algorithm: String,
}

impl InvalidAlgorithm {
    pub(crate) fn new(algorithm: &str) -> Self {
        Self {
            algorithm: algorithm.to_owned(),
        }
    }

    /// Returns the rejected identifier.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }
}

impl fmt::Display for InvalidAlgorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "`{}` is not a supported JWS algorithm",
            self.algorithm
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidAlgorithm {}

/// Errors that can occur when producing a signature.
///
/// A signing failure is always structural (key material absent or unusable);
/// it is never a silent wrong signature.
#[derive(Debug)]
#[non_exhaustive]
pub enum SignError {
    /// Shared secret required by an `HS*` algorithm is absent.
    MissingSecret,
    /// Private key required by an `RS*` algorithm is absent.
    MissingSigningKey,
    /// Key material is present but cannot be used (e.g., malformed PEM).
    InvalidKey(anyhow::Error),
}

impl fmt::Display for SignError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSecret => formatter.write_str("shared secret is required for signing"),
            Self::MissingSigningKey => formatter.write_str("private key is required for signing"),
            Self::InvalidKey(e) => write!(formatter, "invalid signing key: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKey(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Errors that can occur when verifying a signature.
///
/// A *mismatched* signature is not an error; it is reported as an ordinary
/// `false` result. Errors are reserved for ill-formed questions: absent or
/// unusable key material.
#[derive(Debug)]
#[non_exhaustive]
pub enum VerifyError {
    /// Shared secret required by an `HS*` algorithm is absent.
    MissingSecret,
    /// Public key required by an `RS*` algorithm is absent.
    MissingVerifyingKey,
    /// Key material is present but cannot be used (e.g., malformed PEM).
    InvalidKey(anyhow::Error),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSecret => {
                formatter.write_str("shared secret is required for verification")
            }
            Self::MissingVerifyingKey => {
                formatter.write_str("public key is required for verification")
            }
            Self::InvalidKey(e) => write!(formatter, "invalid verifying key: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidKey(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
