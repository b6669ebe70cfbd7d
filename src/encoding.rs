//! base64url transcoding for wire-format signatures.
//!
//! Signatures travel as unpadded base64url strings (RFC 7515 §2). Every
//! signature produced or consumed by this crate passes through this module:
//! raw primitive output is encoded on the way out, and supplied signatures
//! are strictly decoded on the way in.

use base64ct::{Base64UrlUnpadded, Encoding};

use crate::alloc::{String, Vec};

/// Encodes raw bytes as an unpadded base64url string.
pub(crate) fn encode_base64(source: impl AsRef<[u8]>) -> String {
    Base64UrlUnpadded::encode_string(source.as_ref())
}

/// Decodes an unpadded base64url string back to raw bytes.
///
/// Decoding is strict: padding characters, the standard `+` / `/` alphabet
/// and any other byte outside the base64url alphabet are rejected.
pub(crate) fn decode_base64(source: &str) -> Result<Vec<u8>, base64ct::Error> {
    Base64UrlUnpadded::decode_vec(source)
}
