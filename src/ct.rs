//! Constant-time signature comparison.

use subtle::ConstantTimeEq;

/// Compares two signature strings in time bounded by their length, without
/// short-circuiting at the first mismatching byte.
///
/// Returns `false` for operands of differing lengths. The length itself is
/// not secret (it is determined by the algorithm), so only the byte contents
/// are compared in constant time.
pub(crate) fn eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_compare_equal() {
        assert!(eq("", ""));
        assert!(eq("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk", "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"));
    }

    #[test]
    fn differing_strings_compare_unequal() {
        assert!(!eq("abcd", "abce"));
        assert!(!eq("abcd", "Abcd"));
    }

    #[test]
    fn length_mismatch_is_unequal_not_a_panic() {
        assert!(!eq("abcd", "abc"));
        assert!(!eq("", "a"));
        assert!(!eq("abcd", "abcdabcd"));
    }
}
