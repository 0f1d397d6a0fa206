//! The one place where a ratio of integers becomes an integer.
//!
//! Every modulus-ratio division in the scheme (`t/q` scaling after a tensor
//! product, `1/p` after relinearization, `1/δ` in decryption) goes through
//! [`round_div`]. Ties are broken **away from zero**: `2.5 → 3`, `-2.5 → -3`.
//! The rule is exact on big integers, so no floating point is involved.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Returns `num / den` rounded to the nearest integer, ties away from zero.
///
/// # Panics
///
/// Panics if `den` is zero.
pub fn round_div(num: &BigInt, den: &BigInt) -> BigInt {
    assert!(!den.is_zero(), "round_div: division by zero");
    // Truncating division: the remainder carries the sign of `num`.
    let (quotient, remainder) = num.div_rem(den);
    let doubled = remainder.abs() << 1usize;
    if doubled < den.abs() {
        return quotient;
    }
    if num.is_negative() == den.is_negative() {
        quotient + 1
    } else {
        quotient - 1
    }
}
