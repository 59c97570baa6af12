//! Bit utilities for width-parameterized words.
//!
//! The Keccak permutation operates on lanes of `w` bits where `w` is fixed
//! by the permutation width, not by a machine integer type. Lanes live in
//! the low bits of a `u64` and every rotation re-masks to `w` bits.

/// Rotate the low `width` bits of `v` left by `n`, masking the result back
/// to `width` bits. `width` must be in `1..=64`.
pub(crate) fn rotl(v: u64, n: u32, width: u32) -> u64 {
    let mask = if width == 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    };
    let n = n % width;
    if n == 0 {
        return v & mask;
    }
    ((v << n) | ((v & mask) >> (width - n))) & mask
}
