//! Cryptographic backend interface and its default implementation.

use hmac::{digest::KeyInit, Hmac, Mac};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::{alg::HashAlg, alloc::Vec};

/// Capability interface for the cryptographic primitives used by signers
/// and verifiers.
///
/// The core never touches a primitive directly; everything it needs is
/// expressed through this trait, so the primitive layer can be swapped out
/// (e.g., for a hardware-backed implementation) without changing any
/// canonicalization or dispatch logic. The default implementation is
/// [`RustCrypto`].
///
/// Implementations must be deterministic for `digest` and `hmac`; `rsa_sign`
/// may be randomized (e.g., blinded).
pub trait CryptoBackend {
    /// Computes the SHA-2 digest of `message` at the specified strength.
    fn digest(&self, hash: HashAlg, message: &[u8]) -> Vec<u8>;

    /// Computes the keyed digest (HMAC) of `message` under `key` at the
    /// specified strength. HMAC accepts keys of any length.
    fn hmac(&self, hash: HashAlg, key: &[u8], message: &[u8]) -> Vec<u8>;

    /// Produces a raw RSASSA-PKCS1-v1_5 signature over a message `digest`
    /// previously computed at the matching strength.
    ///
    /// # Errors
    ///
    /// Fails if `private_key_pem` cannot be parsed as a PEM-encoded RSA
    /// private key, or if the key cannot produce a signature.
    #[cfg(feature = "rsa")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
    fn rsa_sign(
        &self,
        hash: HashAlg,
        digest: &[u8],
        private_key_pem: &str,
    ) -> anyhow::Result<Vec<u8>>;

    /// Checks a raw RSASSA-PKCS1-v1_5 `signature` against a message `digest`
    /// computed at the matching strength. A mismatch is `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Fails if `public_key_pem` cannot be parsed as a PEM-encoded RSA
    /// public key.
    #[cfg(feature = "rsa")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
    fn rsa_verify(
        &self,
        hash: HashAlg,
        digest: &[u8],
        signature: &[u8],
        public_key_pem: &str,
    ) -> anyhow::Result<bool>;
}

/// Default [`CryptoBackend`] built on the pure-Rust `sha2`, `hmac` and `rsa`
/// crates.
///
/// RSA signing uses blinding; both PKCS#1 (`BEGIN RSA PRIVATE KEY` /
/// `BEGIN RSA PUBLIC KEY`) and PKCS#8 / SPKI (`BEGIN PRIVATE KEY` /
/// `BEGIN PUBLIC KEY`) PEM encodings are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCrypto;

impl CryptoBackend for RustCrypto {
    fn digest(&self, hash: HashAlg, message: &[u8]) -> Vec<u8> {
        match hash {
            HashAlg::Sha256 => sha_digest::<Sha256>(message),
            HashAlg::Sha384 => sha_digest::<Sha384>(message),
            HashAlg::Sha512 => sha_digest::<Sha512>(message),
        }
    }

    fn hmac(&self, hash: HashAlg, key: &[u8], message: &[u8]) -> Vec<u8> {
        match hash {
            HashAlg::Sha256 => keyed_digest::<Hmac<Sha256>>(key, message),
            HashAlg::Sha384 => keyed_digest::<Hmac<Sha384>>(key, message),
            HashAlg::Sha512 => keyed_digest::<Hmac<Sha512>>(key, message),
        }
    }

    #[cfg(feature = "rsa")]
    fn rsa_sign(
        &self,
        hash: HashAlg,
        digest: &[u8],
        private_key_pem: &str,
    ) -> anyhow::Result<Vec<u8>> {
        let signing_key = rsa_keys::parse_private_key(private_key_pem)?;
        signing_key
            .sign_with_rng(&mut rand_core::OsRng, rsa_keys::scheme(hash), digest)
            .map_err(|err| anyhow::anyhow!("cannot produce RSA signature: {err}"))
    }

    #[cfg(feature = "rsa")]
    fn rsa_verify(
        &self,
        hash: HashAlg,
        digest: &[u8],
        signature: &[u8],
        public_key_pem: &str,
    ) -> anyhow::Result<bool> {
        let verifying_key = rsa_keys::parse_public_key(public_key_pem)?;
        Ok(verifying_key
            .verify(rsa_keys::scheme(hash), digest, signature)
            .is_ok())
    }
}

fn sha_digest<D: Digest>(message: &[u8]) -> Vec<u8> {
    D::digest(message).to_vec()
}

fn keyed_digest<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = <M as Mac>::new_from_slice(key).expect("HMACs work with any key size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(feature = "rsa")]
mod rsa_keys {
    use anyhow::anyhow;
    use rsa::{
        pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey},
        pkcs8::{DecodePrivateKey, DecodePublicKey},
        Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey,
    };
    use sha2::{Sha256, Sha384, Sha512};

    use crate::alg::HashAlg;

    pub(super) fn scheme(hash: HashAlg) -> Pkcs1v15Sign {
        match hash {
            HashAlg::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            HashAlg::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            HashAlg::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }

    pub(super) fn parse_private_key(pem: &str) -> anyhow::Result<RsaPrivateKey> {
        let pem = pem.trim();
        // Both PKCS#1 and PKCS#8 encodings are in circulation.
        if pem.contains("RSA PRIVATE KEY") {
            RsaPrivateKey::from_pkcs1_pem(pem)
                .map_err(|err| anyhow!("cannot parse PKCS#1 private key: {err}"))
        } else {
            RsaPrivateKey::from_pkcs8_pem(pem)
                .map_err(|err| anyhow!("cannot parse PKCS#8 private key: {err}"))
        }
    }

    pub(super) fn parse_public_key(pem: &str) -> anyhow::Result<RsaPublicKey> {
        let pem = pem.trim();
        if pem.contains("RSA PUBLIC KEY") {
            RsaPublicKey::from_pkcs1_pem(pem)
                .map_err(|err| anyhow!("cannot parse PKCS#1 public key: {err}"))
        } else {
            RsaPublicKey::from_public_key_pem(pem)
                .map_err(|err| anyhow!("cannot parse SPKI public key: {err}"))
        }
    }
}
