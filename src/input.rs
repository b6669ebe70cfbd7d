//! Canonical conversion of heterogeneous payloads and key material.

use serde::Serialize;
use zeroize::Zeroize;

use core::{fmt, ops};

use crate::alloc::{Cow, String, Vec};

/// Payload or key material in one of the supported surface representations.
///
/// Callers may hold "the same" data as text, as raw bytes or as a structured
/// JSON value. Before any cryptographic operation, an `Input` is reduced to
/// a single canonical form — [`to_bytes()`](Self::to_bytes) for message and
/// secret bytes, [`to_text()`](Self::to_text) for PEM key strings — so that
/// signing and verifying the same logical data always operate on identical
/// bytes, regardless of how each call chose to represent it.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Input<'a> {
    /// Text; canonicalizes to its UTF-8 bytes.
    Text(Cow<'a, str>),
    /// Raw bytes; canonicalize as-is.
    Binary(Cow<'a, [u8]>),
    /// Structured value; canonicalizes to its JSON serialization.
    Structured(serde_json::Value),
}

impl<'a> Input<'a> {
    /// Creates a structured input from any serializable value.
    ///
    /// # Errors
    ///
    /// Propagates serialization errors for values that cannot be represented
    /// in JSON (e.g., maps with non-string keys).
    pub fn structured<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Structured)
    }

    /// Returns the canonical byte form of this input.
    ///
    /// Two logically equal inputs in different representations (e.g., a text
    /// string and the buffer holding its UTF-8 encoding) yield identical
    /// bytes. Structured values serialize deterministically within one
    /// process: JSON objects are backed by ordered maps.
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_bytes()),
            Self::Binary(bytes) => Cow::Borrowed(bytes.as_ref()),
            Self::Structured(value) => Cow::Owned(json_string(value).into_bytes()),
        }
    }

    /// Returns the canonical string form of this input, as expected by
    /// primitives that consume textual key material (e.g., PEM documents).
    ///
    /// Binary inputs are decoded as UTF-8, with invalid sequences replaced.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            Self::Binary(bytes) => String::from_utf8_lossy(bytes),
            Self::Structured(value) => Cow::Owned(json_string(value)),
        }
    }
}

fn json_string(value: &serde_json::Value) -> String {
    serde_json::to_string(value).expect("JSON value serialization cannot fail")
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Input<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Binary(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for Input<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(Cow::Owned(bytes))
    }
}

impl From<serde_json::Value> for Input<'_> {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}

/// Canonical byte form of secret key material.
///
/// If the bytes are owned (i.e., canonicalization had to allocate), they are
/// zeroized on drop; borrowed bytes remain the caller's responsibility.
/// The container never exposes its contents through `Debug`.
pub(crate) struct SecretBytes<'a>(Cow<'a, [u8]>);

impl<'a> SecretBytes<'a> {
    pub(crate) fn new(inner: Cow<'a, [u8]>) -> Self {
        Self(inner)
    }
}

impl fmt::Debug for SecretBytes<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SecretBytes")
            .field("len", &self.0.len())
            .finish()
    }
}

impl Drop for SecretBytes<'_> {
    fn drop(&mut self) {
        // Borrowed bytes do not need any special cleaning.
        if let Cow::Owned(bytes) = &mut self.0 {
            Zeroize::zeroize(bytes);
        }
    }
}

impl ops::Deref for SecretBytes<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for SecretBytes<'_> {
    fn as_ref(&self) -> &[u8] {
        self
    }
}
