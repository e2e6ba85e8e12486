//! Branch-free integer helpers

/// Absolute value of `n` without branching.
///
/// The sign bit is smeared across the whole word, which yields a mask of
/// either all zeros or all ones. XOR-ing with the mask and subtracting it
/// is the two's complement negation for negative values and a no-op otherwise.
///
/// # Panics
/// `n` must not be [i32::MIN], its absolute value is not representable.
/// This is only checked in debug builds.
#[inline]
#[must_use]
pub fn abs(n: i32) -> i32 {
    debug_assert_ne!(n, i32::MIN, "absolute value of i32::MIN overflows");

    let mask = n >> (i32::BITS - 1);
    (n ^ mask).wrapping_sub(mask)
}

/// Returns `1` for positive and `-1` for negative values.
///
/// # Panics
/// Panics if `n` is zero.
#[inline]
#[must_use]
pub fn sign(n: i32) -> i32 {
    debug_assert_ne!(n, 0, "sign of zero is undefined");

    n / abs(n)
}
