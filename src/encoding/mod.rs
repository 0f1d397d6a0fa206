//! Integer <-> plaintext polynomial encodings.
//!
//! Two encodings are offered and never mixed:
//!
//! * **single slot** ([`Encoder::encode`] / [`Encoder::decode`]): `value mod t`
//!   sits in the constant coefficient. This is what `Encryptor::encrypt`
//!   and `Decryptor::decrypt` use.
//! * **base b** ([`Encoder::encode_base`] / [`Encoder::decode_base`]): the
//!   base-b digits of a non-negative value fill coefficients `0..n`, and
//!   decoding evaluates the polynomial at `b`. Holds more than `t` values
//!   but breaks once a coefficient overflows `t` or a product wraps past
//!   `x^n`.

use crate::errors::{BfvError, BfvResult};
use crate::rings::{Poly, RingContext};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Encoder {
    context: Arc<RingContext>,
}

impl Encoder {
    pub fn new(context: Arc<RingContext>) -> Self {
        Self { context }
    }

    /// `value mod t` in the constant coefficient, zeros elsewhere.
    pub fn encode(&self, value: i64) -> Poly {
        let m = BigInt::from(value).mod_floor(self.context.plain_modulus());
        Poly::constant_term(self.context.n(), m)
    }

    /// Reads the constant coefficient back as an element of `[0, t)`.
    pub fn decode(&self, plaintext: &Poly) -> u64 {
        plaintext
            .constant()
            .mod_floor(self.context.plain_modulus())
            .to_u64()
            .unwrap_or_default()
    }

    /// Base-`base` digits of `value`, least significant in the constant slot.
    pub fn encode_base(&self, value: u64, base: u64) -> BfvResult<Poly> {
        self.check_base(base)?;
        let n = self.context.n();
        let mut digits = Vec::with_capacity(n);
        let mut rest = value;
        while rest > 0 {
            if digits.len() == n {
                return Err(BfvError::ValueTooLarge {
                    value,
                    base,
                    slots: n,
                });
            }
            digits.push(rest % base);
            rest /= base;
        }
        Ok(Poly::from_coeffs(n, digits))
    }

    /// Evaluates `plaintext` at `base` after reducing its coefficients mod `t`.
    pub fn decode_base(&self, plaintext: &Poly, base: u64) -> BfvResult<BigInt> {
        self.check_base(base)?;
        let base = BigInt::from(base);
        let t = self.context.plain_modulus();
        let value = plaintext
            .coeffs()
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * &base + c.mod_floor(t));
        Ok(value)
    }

    fn check_base(&self, base: u64) -> BfvResult<()> {
        if base < 2 || base > self.context.t() {
            return Err(BfvError::invalid(format!(
                "encode base must lie in [2, t = {}], got {base}",
                self.context.t()
            )));
        }
        Ok(())
    }
}
