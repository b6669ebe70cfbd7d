//! HMAC-based signing (`HS*` family).

use crate::{
    alg::HashAlg,
    alloc::String,
    backend::CryptoBackend,
    ct, encoding,
    error::{SignError, VerifyError},
    input::{Input, SecretBytes},
};

/// Computes the base64url signature of `payload` under `secret`.
///
/// Signing and verification both funnel through this function, so the two
/// paths canonicalize identically by construction.
fn compute<B: CryptoBackend>(
    backend: &B,
    hash: HashAlg,
    payload: &Input<'_>,
    secret: &Input<'_>,
) -> String {
    let secret = SecretBytes::new(secret.to_bytes());
    let mac = backend.hmac(hash, &secret, &payload.to_bytes());
    encoding::encode_base64(mac)
}

pub(crate) fn sign<B: CryptoBackend>(
    backend: &B,
    hash: HashAlg,
    payload: &Input<'_>,
    key: Option<&Input<'_>>,
) -> Result<String, SignError> {
    let secret = key.ok_or(SignError::MissingSecret)?;
    Ok(compute(backend, hash, payload, secret))
}

pub(crate) fn verify<B: CryptoBackend>(
    backend: &B,
    hash: HashAlg,
    payload: &Input<'_>,
    signature: &str,
    key: Option<&Input<'_>>,
) -> Result<bool, VerifyError> {
    let secret = key.ok_or(VerifyError::MissingSecret)?;
    let expected = compute(backend, hash, payload, secret);
    Ok(ct::eq(&expected, signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::backend::RustCrypto;

    #[test]
    fn signature_lengths_match_hash_strength() {
        let payload = Input::from("payload");
        let secret = Input::from("secret");
        // Unpadded base64url of a digest-sized MAC.
        let cases = [
            (HashAlg::Sha256, 43),
            (HashAlg::Sha384, 64),
            (HashAlg::Sha512, 86),
        ];
        for (hash, expected_len) in cases {
            let signature = sign(&RustCrypto, hash, &payload, Some(&secret)).unwrap();
            assert_eq!(signature.len(), expected_len);
        }
    }

    #[test]
    fn verification_is_strength_specific() {
        let payload = Input::from("payload");
        let secret = Input::from("secret");
        let signature = sign(&RustCrypto, HashAlg::Sha256, &payload, Some(&secret)).unwrap();
        assert!(!verify(&RustCrypto, HashAlg::Sha384, &payload, &signature, Some(&secret)).unwrap());
        assert!(verify(&RustCrypto, HashAlg::Sha256, &payload, &signature, Some(&secret)).unwrap());
    }
}
