//! Parameters of the quotient ring Z[x]/(x^n + 1) and the arithmetic on it.
//!
//! `add` and `mul` work over unbounded integers and only fold powers of `x`
//! past `n - 1` back down (`x^n = -1`). Reduction by `q`, `t` or `p·q` is
//! left to the caller, which knows which modulus applies at each step.

use super::builder::RingContextBuilder;
use super::poly::Poly;
use crate::errors::{BfvError, BfvResult};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

#[derive(Debug, Clone, PartialEq)]
pub struct RingContext {
    n: usize,
    t: u64,
    q: BigInt,
    p: BigInt,
    mean: f64,
    scale: f64,
    encode_base: u64,
    // Cached from the above.
    t_big: BigInt,
    delta: BigInt,
    pq: BigInt,
}

impl RingContext {
    /// Builds a context for the ring Z[x]/(x^n + 1).
    ///
    /// * `t` - plaintext modulus
    /// * `q` - ciphertext modulus
    /// * `p` - relinearization modulus, the evaluation key lives mod `p·q`
    /// * `mean`, `scale` - parameters of the rounded Gaussian error
    /// * `encode_base` - base used by the base-b plaintext encoding
    pub fn new(
        n: usize,
        t: u64,
        q: BigInt,
        p: BigInt,
        mean: f64,
        scale: f64,
        encode_base: u64,
    ) -> BfvResult<Self> {
        if n == 0 {
            return Err(BfvError::invalid("ring degree n must be positive"));
        }
        if t < 2 {
            return Err(BfvError::invalid(format!(
                "plaintext modulus t must be at least 2, got {t}"
            )));
        }
        let t_big = BigInt::from(t);
        if q < t_big {
            return Err(BfvError::invalid(format!(
                "ciphertext modulus q = {q} must not be smaller than t = {t}"
            )));
        }
        if !p.is_positive() {
            return Err(BfvError::invalid(format!(
                "relinearization modulus p must be positive, got {p}"
            )));
        }
        if !mean.is_finite() {
            return Err(BfvError::invalid("error mean must be finite"));
        }
        if !(scale.is_finite() && scale >= 0.0) {
            return Err(BfvError::invalid(format!(
                "error scale must be finite and non-negative, got {scale}"
            )));
        }
        if encode_base < 2 || encode_base > t {
            return Err(BfvError::invalid(format!(
                "encode base must lie in [2, t = {t}], got {encode_base}"
            )));
        }

        let delta = &q / &t_big;
        let pq = &p * &q;
        Ok(Self {
            n,
            t,
            q,
            p,
            mean,
            scale,
            encode_base,
            t_big,
            delta,
            pq,
        })
    }

    pub fn builder(n: usize, q: BigInt, t: u64) -> RingContextBuilder {
        RingContextBuilder::new(n, q, t)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn t(&self) -> u64 {
        self.t
    }

    /// `t` as a big integer, for modular arithmetic on coefficients.
    pub fn plain_modulus(&self) -> &BigInt {
        &self.t_big
    }

    pub fn q(&self) -> &BigInt {
        &self.q
    }

    pub fn p(&self) -> &BigInt {
        &self.p
    }

    pub fn pq(&self) -> &BigInt {
        &self.pq
    }

    /// `δ = floor(q / t)`, the plaintext scaling factor.
    pub fn delta(&self) -> &BigInt {
        &self.delta
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn encode_base(&self) -> u64 {
        self.encode_base
    }

    /// Coefficients of `x^n + 1`, lowest degree first.
    pub fn reduction_polynomial(&self) -> Vec<BigInt> {
        let mut coeffs = vec![BigInt::zero(); self.n + 1];
        coeffs[0] = BigInt::one();
        coeffs[self.n] = BigInt::one();
        coeffs
    }

    pub fn zero(&self) -> Poly {
        Poly::zero(self.n)
    }

    /// Rejects polynomials that do not have exactly `n` coefficients.
    pub fn check(&self, poly: &Poly) -> BfvResult<()> {
        if poly.len() == self.n {
            Ok(())
        } else {
            Err(BfvError::LengthMismatch {
                expected: self.n,
                actual: poly.len(),
            })
        }
    }

    /// Coefficient-wise sum. Both inputs already have degree `< n`, so the
    /// reduction by `x^n + 1` leaves the sum unchanged.
    pub fn add(&self, lhs: &Poly, rhs: &Poly) -> Poly {
        debug_assert_eq!(lhs.len(), self.n);
        debug_assert_eq!(rhs.len(), self.n);
        Poly::from_coeffs(
            self.n,
            lhs.coeffs().iter().zip(rhs.coeffs()).map(|(a, b)| a + b),
        )
    }

    /// Schoolbook product reduced by `x^n + 1`.
    ///
    /// The term of degree `n + k` folds onto degree `k` with its sign
    /// flipped.
    pub fn mul(&self, lhs: &Poly, rhs: &Poly) -> Poly {
        debug_assert_eq!(lhs.len(), self.n);
        debug_assert_eq!(rhs.len(), self.n);
        let n = self.n;
        let mut out = vec![BigInt::zero(); n];

        for (i, a) in lhs.coeffs().iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs().iter().enumerate() {
                let term = a * b;
                let k = i + j;
                if k < n {
                    out[k] += term;
                } else {
                    out[k - n] -= term;
                }
            }
        }

        Poly::from_coeffs(n, out)
    }
}
