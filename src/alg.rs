//! Algorithm descriptors and per-family signing / verification routines.

use core::{fmt, str::FromStr};

use crate::error::InvalidAlgorithm;

pub(crate) mod hmacs;
// RSA implementation.
#[cfg(feature = "rsa")]
pub(crate) mod rsa;

/// SHA-2 hash function strength used by an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HashAlg {
    /// SHA-256, 32-byte output.
    Sha256,
    /// SHA-384, 48-byte output.
    Sha384,
    /// SHA-512, 64-byte output.
    Sha512,
}

impl HashAlg {
    /// Returns the bit strength of the hash output.
    pub fn bits(self) -> u16 {
        match self {
            Self::Sha256 => 256,
            Self::Sha384 => 384,
            Self::Sha512 => 512,
        }
    }
}

impl fmt::Display for HashAlg {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        })
    }
}

/// JWS signing algorithm: a family together with its hash strength.
///
/// Parsed from the identifier grammar of [RFC 7518]: `HS*` / `RS*` at
/// strengths 256, 384 and 512, or the literal `none`. Matching is
/// case-insensitive and exact; substrings, superstrings and unknown names
/// fail with [`InvalidAlgorithm`].
///
/// With the `rsa` crate feature disabled, the `RS*` identifiers are not
/// supported and fail to parse like any other unknown name.
///
/// [RFC 7518]: https://tools.ietf.org/html/rfc7518#section-3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
    /// HMAC family (`HS256` / `HS384` / `HS512`): keyed digest with a shared
    /// secret.
    Hmac(HashAlg),
    /// RSA family (`RS256` / `RS384` / `RS512`): RSASSA-PKCS1-v1_5 with a
    /// PEM-encoded keypair.
    #[cfg(feature = "rsa")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
    Rsa(HashAlg),
    /// Unsecured JWS (`none`): the empty signature.
    None,
}

impl Algorithm {
    /// Returns the canonical name of this algorithm as used in the JOSE
    /// `alg` header parameter.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hmac(HashAlg::Sha256) => "HS256",
            Self::Hmac(HashAlg::Sha384) => "HS384",
            Self::Hmac(HashAlg::Sha512) => "HS512",
            #[cfg(feature = "rsa")]
            Self::Rsa(HashAlg::Sha256) => "RS256",
            #[cfg(feature = "rsa")]
            Self::Rsa(HashAlg::Sha384) => "RS384",
            #[cfg(feature = "rsa")]
            Self::Rsa(HashAlg::Sha512) => "RS512",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = InvalidAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.to_ascii_lowercase();
        Ok(match canonical.as_str() {
            "hs256" => Self::Hmac(HashAlg::Sha256),
            "hs384" => Self::Hmac(HashAlg::Sha384),
            "hs512" => Self::Hmac(HashAlg::Sha512),
            #[cfg(feature = "rsa")]
            "rs256" => Self::Rsa(HashAlg::Sha256),
            #[cfg(feature = "rsa")]
            "rs384" => Self::Rsa(HashAlg::Sha384),
            #[cfg(feature = "rsa")]
            "rs512" => Self::Rsa(HashAlg::Sha512),
            "none" => Self::None,
            _ => return Err(InvalidAlgorithm::new(s)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_parse_case_insensitively() {
        for raw in ["HS256", "hs256", "Hs256", "hS256"] {
            assert_eq!(
                raw.parse::<Algorithm>().unwrap(),
                Algorithm::Hmac(HashAlg::Sha256)
            );
        }
        assert_eq!(
            "hs384".parse::<Algorithm>().unwrap(),
            Algorithm::Hmac(HashAlg::Sha384)
        );
        assert_eq!(
            "HS512".parse::<Algorithm>().unwrap(),
            Algorithm::Hmac(HashAlg::Sha512)
        );
        for raw in ["none", "NONE", "None"] {
            assert_eq!(raw.parse::<Algorithm>().unwrap(), Algorithm::None);
        }
    }

    #[cfg(feature = "rsa")]
    #[test]
    fn rsa_identifiers_parse() {
        assert_eq!(
            "rs256".parse::<Algorithm>().unwrap(),
            Algorithm::Rsa(HashAlg::Sha256)
        );
        assert_eq!(
            "RS384".parse::<Algorithm>().unwrap(),
            Algorithm::Rsa(HashAlg::Sha384)
        );
        assert_eq!(
            "Rs512".parse::<Algorithm>().unwrap(),
            Algorithm::Rsa(HashAlg::Sha512)
        );
    }

    #[test]
    fn invalid_identifiers_are_rejected() {
        let invalid = [
            "",
            "hs",
            "rs",
            "hs255",
            "HS-256",
            "ahs256b",
            "rs512x",
            " hs256",
            "hs256 ",
            "none2",
            "something bogus",
        ];
        for raw in invalid {
            let err = raw.parse::<Algorithm>().unwrap_err();
            assert_eq!(err.algorithm(), raw);
        }
    }

    #[test]
    fn canonical_names_round_trip() {
        let mut algorithms = vec![
            Algorithm::Hmac(HashAlg::Sha256),
            Algorithm::Hmac(HashAlg::Sha384),
            Algorithm::Hmac(HashAlg::Sha512),
            Algorithm::None,
        ];
        #[cfg(feature = "rsa")]
        algorithms.extend([
            Algorithm::Rsa(HashAlg::Sha256),
            Algorithm::Rsa(HashAlg::Sha384),
            Algorithm::Rsa(HashAlg::Sha512),
        ]);

        for algorithm in algorithms {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }
}
