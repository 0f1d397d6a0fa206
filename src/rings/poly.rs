use crate::math::round_div;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::ops::Neg;

/// An element of Z[x]/(x^n + 1) stored as exactly `n` coefficients,
/// lowest degree first.
///
/// Coefficients are unbounded integers. A `Poly` never reduces itself;
/// callers pick the modulus with [`Poly::reduce`] after each step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    coeffs: Vec<BigInt>,
}

impl Poly {
    pub fn zero(n: usize) -> Self {
        Self {
            coeffs: vec![BigInt::zero(); n],
        }
    }

    /// Builds a polynomial of degree `< n`, padding with zeros or
    /// dropping coefficients past `n`.
    pub fn from_coeffs<I>(n: usize, coeffs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BigInt>,
    {
        let mut out: Vec<BigInt> = coeffs.into_iter().take(n).map(Into::into).collect();
        out.resize(n, BigInt::zero());
        Self { coeffs: out }
    }

    /// Polynomial with `value` in the constant slot and zeros elsewhere.
    pub fn constant_term(n: usize, value: BigInt) -> Self {
        let mut poly = Self::zero(n);
        if let Some(first) = poly.coeffs.first_mut() {
            *first = value;
        }
        poly
    }

    /// Number of stored coefficients, which is the ring degree `n`.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn coeffs(&self) -> &[BigInt] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<BigInt> {
        self.coeffs
    }

    pub fn constant(&self) -> BigInt {
        self.coeffs.first().cloned().unwrap_or_default()
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Floor-modulo every coefficient into `[0, modulus)`.
    pub fn reduce(&self, modulus: &BigInt) -> Self {
        self.map(|c| c.mod_floor(modulus))
    }

    /// Lifts coefficients from `[0, modulus)` to `(-modulus/2, modulus/2]`.
    pub fn centered(&self, modulus: &BigInt) -> Self {
        let half = modulus >> 1usize;
        self.map(|c| {
            let r = c.mod_floor(modulus);
            if r > half { r - modulus } else { r }
        })
    }

    /// `round(c · num / den)` per coefficient, using the crate rounding rule.
    pub fn scale_round(&self, num: &BigInt, den: &BigInt) -> Self {
        self.map(|c| round_div(&(c * num), den))
    }

    pub fn scalar_mul(&self, factor: &BigInt) -> Self {
        self.map(|c| c * factor)
    }

    /// Largest absolute coefficient.
    pub fn infinity_norm(&self) -> BigInt {
        self.coeffs
            .iter()
            .map(Signed::abs)
            .max()
            .unwrap_or_default()
    }

    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&BigInt) -> BigInt,
    {
        Self {
            coeffs: self.coeffs.iter().map(f).collect(),
        }
    }
}

impl Neg for Poly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
        }
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl<'a> IntoIterator for &'a Poly {
    type Item = &'a BigInt;
    type IntoIter = std::slice::Iter<'a, BigInt>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn from_coeffs_pads_and_truncates() {
        let short = Poly::from_coeffs(4, [1i64, 2]);
        assert_eq!(short.coeffs(), &[big(1), big(2), big(0), big(0)]);

        let long = Poly::from_coeffs(2, [1i64, 2, 3, 4]);
        assert_eq!(long.coeffs(), &[big(1), big(2)]);
    }

    #[test]
    fn reduce_uses_floor_modulo() {
        let p = Poly::from_coeffs(4, [-1i64, 17, 35, -18]);
        let r = p.reduce(&big(17));
        assert_eq!(r.coeffs(), &[big(16), big(0), big(1), big(16)]);
    }

    #[test]
    fn centered_lifts_upper_half_to_negatives() {
        let p = Poly::from_coeffs(4, [0i64, 8, 9, 16]);
        let c = p.centered(&big(17));
        assert_eq!(c.coeffs(), &[big(0), big(8), big(-8), big(-1)]);
    }

    #[test]
    fn scale_round_rounds_ties_away_from_zero() {
        // 3 * 1/2 = 1.5 -> 2, -3 * 1/2 = -1.5 -> -2, 1 * 1/2 = 0.5 -> 1
        let p = Poly::from_coeffs(4, [3i64, -3, 1, 4]);
        let s = p.scale_round(&big(1), &big(2));
        assert_eq!(s.coeffs(), &[big(2), big(-2), big(1), big(2)]);
    }

    #[test]
    fn constant_term_and_norm() {
        let p = Poly::constant_term(8, big(-5));
        assert_eq!(p.len(), 8);
        assert!(!p.is_empty());
        assert!(Poly::zero(0).is_empty());
        assert_eq!(p.constant(), big(-5));
        assert_eq!(p.infinity_norm(), big(5));
        assert!(!p.is_zero());
        assert!(Poly::zero(8).is_zero());
    }

    #[test]
    fn negation_flips_every_coefficient() {
        let p = Poly::from_coeffs(3, [1i64, -2, 0]);
        assert_eq!((-p).coeffs(), &[big(-1), big(2), big(0)]);
    }
}
