use crate::errors::{BfvError, BfvResult};
use crate::rings::Poly;
use num_bigint::{BigInt, BigUint, Sign};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Normal};

/// A fresh ChaCha20 source seeded from the thread-local OS-seeded generator.
///
/// Each session should own one; sources are not meant to be shared across
/// threads.
pub fn session_rng() -> ChaCha20Rng {
    ChaCha20Rng::from_rng(&mut rand::rng())
}

/// Samples `n` coefficients independently and uniformly from `{-1, 0, 1}`.
pub fn ternary_poly<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Poly {
    Poly::from_coeffs(n, (0..n).map(|_| rng.random_range(-1i64..=1)))
}

/// Samples `n` rounded normal coefficients with the given mean and
/// standard deviation.
///
/// `mean` must be finite and `std_dev` finite and non-negative.
pub fn gaussian_poly<R: Rng + ?Sized>(
    n: usize,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> BfvResult<Poly> {
    if !mean.is_finite() {
        return Err(BfvError::invalid(format!(
            "gaussian_poly: mean must be finite, got {mean}"
        )));
    }
    if !(std_dev.is_finite() && std_dev >= 0.0) {
        return Err(BfvError::invalid(format!(
            "gaussian_poly: std_dev must be finite and non-negative, got {std_dev}"
        )));
    }
    let normal = Normal::new(mean, std_dev).map_err(|err| {
        BfvError::invalid(format!(
            "gaussian_poly: mean {mean} / std_dev {std_dev} rejected: {err}"
        ))
    })?;
    Ok(Poly::from_coeffs(
        n,
        (0..n).map(|_| normal.sample(&mut *rng).round() as i64),
    ))
}

/// Samples `n` coefficients uniformly from `[0, modulus)`.
///
/// # Panics
///
/// Panics if `modulus` is not positive.
pub fn uniform_poly<R: Rng + ?Sized>(n: usize, modulus: &BigInt, rng: &mut R) -> Poly {
    let bound = match modulus.to_biguint() {
        Some(bound) if bound.bits() > 0 => bound,
        _ => panic!("uniform_poly: modulus must be positive, got {modulus}"),
    };
    Poly::from_coeffs(
        n,
        (0..n).map(|_| BigInt::from_biguint(Sign::Plus, uniform_below(&bound, &mut *rng))),
    )
}

/// Rejection sampling over the smallest byte string that covers `bound`.
fn uniform_below<R: Rng + ?Sized>(bound: &BigUint, rng: &mut R) -> BigUint {
    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let top_mask = 0xffu8 >> (len as u64 * 8 - bits);
    let mut bytes = vec![0u8; len];
    loop {
        rng.fill_bytes(&mut bytes);
        if let Some(top) = bytes.last_mut() {
            *top &= top_mask;
        }
        let candidate = BigUint::from_bytes_le(&bytes);
        if &candidate < bound {
            return candidate;
        }
    }
}
