use super::context::RingContext;
use crate::errors::BfvResult;
use num_bigint::BigInt;

/// Builder for [`RingContext`] with the usual defaults filled in.
///
/// Unset values fall back to: `p = q² + 1`, error mean `0.0`, error standard
/// deviation `3.2`, encode base `t`.
#[derive(Debug, Clone)]
pub struct RingContextBuilder {
    n: usize,
    q: BigInt,
    t: u64,
    relin_modulus: Option<BigInt>,
    error_mean: Option<f64>,
    error_std: Option<f64>,
    encode_base: Option<u64>,
}

impl RingContextBuilder {
    pub fn new(n: usize, q: BigInt, t: u64) -> Self {
        Self {
            n,
            q,
            t,
            relin_modulus: None,
            error_mean: None,
            error_std: None,
            encode_base: None,
        }
    }

    /// Toy parameters: n = 8, q = 2^19, t = 2^5, p = q² + 1, σ = 3.2.
    ///
    /// Noise budget for about one ciphertext multiplication. Not secure.
    pub fn reference() -> Self {
        Self::new(8, BigInt::from(1u64 << 19), 1 << 5)
    }

    pub fn relin_modulus(mut self, p: BigInt) -> Self {
        self.relin_modulus = Some(p);
        self
    }

    pub fn error_mean(mut self, mean: f64) -> Self {
        self.error_mean = Some(mean);
        self
    }

    pub fn error_std(mut self, std_dev: f64) -> Self {
        self.error_std = Some(std_dev);
        self
    }

    pub fn encode_base(mut self, base: u64) -> Self {
        self.encode_base = Some(base);
        self
    }

    pub fn build(self) -> BfvResult<RingContext> {
        let p = self
            .relin_modulus
            .unwrap_or_else(|| &self.q * &self.q + 1);
        RingContext::new(
            self.n,
            self.t,
            self.q,
            p,
            self.error_mean.unwrap_or(0.0),
            self.error_std.unwrap_or(3.2),
            self.encode_base.unwrap_or(self.t),
        )
    }
}
