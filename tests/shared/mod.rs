//! Functionality shared by the `algorithms` and `rsa` tests.

use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{seq::index::sample as sample_indexes, thread_rng};

use jwa::{Input, Jwa};

/// Maximum number of signature bits mangled per algorithm.
const MAX_MANGLED_BITS: usize = 128;

/// Exercises the verification contract of `algorithm`: round-trip, tamper
/// sensitivity in every sampled signature bit, and wrong-key rejection.
///
/// For symmetric algorithms, `signing_key` and `verifying_key` coincide.
pub fn test_algorithm(
    algorithm: &Jwa,
    signing_key: &Input<'_>,
    verifying_key: &Input<'_>,
    wrong_key: &Input<'_>,
) {
    let payload = Input::from("h. jon benjamin");

    // Successful case.
    let signature = algorithm.sign(&payload, Some(signing_key)).unwrap();
    assert!(algorithm
        .verify(&payload, &signature, Some(verifying_key))
        .unwrap());

    // Mutate signature bits.
    let signature_bytes = Base64UrlUnpadded::decode_vec(&signature).unwrap();
    let signature_bits = signature_bytes.len() * 8;
    let mangled_bits: Box<dyn Iterator<Item = usize>> = if signature_bits <= MAX_MANGLED_BITS {
        Box::new(0..signature_bits)
    } else {
        let indexes = sample_indexes(&mut thread_rng(), signature_bits, MAX_MANGLED_BITS);
        Box::new(indexes.into_iter())
    };
    for i in mangled_bits {
        let mut mangled_bytes = signature_bytes.clone();
        mangled_bytes[i / 8] ^= 1 << (i % 8);
        let mangled = Base64UrlUnpadded::encode_string(&mangled_bytes);
        assert!(
            !algorithm
                .verify(&payload, &mangled, Some(verifying_key))
                .unwrap(),
            "mangled bit {i} went undetected"
        );
    }

    // Unrelated and truncated signature strings.
    assert!(!algorithm
        .verify(&payload, "other sig", Some(verifying_key))
        .unwrap());
    assert!(!algorithm
        .verify(&payload, &signature[..signature.len() - 1], Some(verifying_key))
        .unwrap());

    // Mutate the payload.
    let mangled_payload = Input::from("H. Jon Benjamin");
    assert!(!algorithm
        .verify(&mangled_payload, &signature, Some(verifying_key))
        .unwrap());

    // Wrong key.
    assert!(!algorithm
        .verify(&payload, &signature, Some(wrong_key))
        .unwrap());
}
