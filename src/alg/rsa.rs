//! RSA-based signing (`RS*` family, RSASSA-PKCS1-v1_5).

use crate::{
    alg::HashAlg,
    alloc::String,
    backend::CryptoBackend,
    encoding,
    error::{SignError, VerifyError},
    input::Input,
};

pub(crate) fn sign<B: CryptoBackend>(
    backend: &B,
    hash: HashAlg,
    payload: &Input<'_>,
    key: Option<&Input<'_>>,
) -> Result<String, SignError> {
    let private_key = key.ok_or(SignError::MissingSigningKey)?;
    let digest = backend.digest(hash, &payload.to_bytes());
    let signature = backend
        .rsa_sign(hash, &digest, &private_key.to_text())
        .map_err(SignError::InvalidKey)?;
    Ok(encoding::encode_base64(signature))
}

pub(crate) fn verify<B: CryptoBackend>(
    backend: &B,
    hash: HashAlg,
    payload: &Input<'_>,
    signature: &str,
    key: Option<&Input<'_>>,
) -> Result<bool, VerifyError> {
    let public_key = key.ok_or(VerifyError::MissingVerifyingKey)?;
    // A string outside the base64url alphabet cannot encode any signature;
    // fail closed instead of handing ambiguous bytes to the primitive.
    let Ok(raw_signature) = encoding::decode_base64(signature) else {
        return Ok(false);
    };
    let digest = backend.digest(hash, &payload.to_bytes());
    backend
        .rsa_verify(hash, &digest, &raw_signature, &public_key.to_text())
        .map_err(VerifyError::InvalidKey)
}
