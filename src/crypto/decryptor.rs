use super::Ciphertext;
use crate::encoding::Encoder;
use crate::errors::{BfvError, BfvResult};
use crate::keys::SecretKey;
use crate::math::round_div;
use crate::rings::{Poly, RingContext};
use num_bigint::BigInt;
use num_traits::Zero;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Decryptor {
    context: Arc<RingContext>,
    encoder: Encoder,
}

impl Decryptor {
    pub fn new(context: Arc<RingContext>) -> Self {
        let encoder = Encoder::new(Arc::clone(&context));
        Self { context, encoder }
    }

    /// Recovers the single-slot plaintext in `[0, t)`.
    ///
    /// Once the ciphertext noise reaches `q / 2t` this returns a wrong value
    /// without any error; see [`Decryptor::noise_budget`].
    pub fn decrypt(&self, ciphertext: &Ciphertext, secret_key: &SecretKey) -> BfvResult<u64> {
        let plaintext = self.decrypt_plaintext(ciphertext, secret_key)?;
        Ok(self.encoder.decode(&plaintext))
    }

    /// Decrypts a base-b encoded ciphertext back to its integer value.
    pub fn decrypt_base(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> BfvResult<BigInt> {
        let plaintext = self.decrypt_plaintext(ciphertext, secret_key)?;
        self.encoder
            .decode_base(&plaintext, self.context.encode_base())
    }

    /// `round((c1 + c2 * sk mod q) / δ) mod t`, coefficient by coefficient.
    pub fn decrypt_plaintext(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> BfvResult<Poly> {
        let raw = self.raw(ciphertext, secret_key)?;
        Ok(self.round_to_plaintext(&raw))
    }

    /// Largest coefficient of `c1 + c2 * sk - δ * m`, centered mod q, where
    /// `m` is the decrypted plaintext.
    ///
    /// Decryption is exact while this stays below `δ / 2`. Past that point
    /// `m` itself is wrong and the measurement underestimates the real noise.
    pub fn noise(&self, ciphertext: &Ciphertext, secret_key: &SecretKey) -> BfvResult<BigInt> {
        let raw = self.raw(ciphertext, secret_key)?;
        let ctx = &self.context;
        let scaled = self.round_to_plaintext(&raw).scalar_mul(ctx.delta());
        let residual = ctx.add(&raw, &-scaled).centered(ctx.q());
        Ok(residual.infinity_norm())
    }

    /// Remaining noise budget in bits, `floor(log2((δ/2) / noise))`.
    ///
    /// Zero once the noise passes `δ/4`: the ciphertext may already decrypt
    /// wrongly, and another multiplication almost certainly breaks it.
    pub fn noise_budget(&self, ciphertext: &Ciphertext, secret_key: &SecretKey) -> BfvResult<u64> {
        let noise = self.noise(ciphertext, secret_key)?;
        let half_delta = self.context.delta() >> 1usize;
        if noise.is_zero() {
            return Ok(half_delta.bits());
        }
        let ratio = half_delta / noise;
        Ok(ratio.bits().saturating_sub(1))
    }

    fn round_to_plaintext(&self, raw: &Poly) -> Poly {
        let ctx = &self.context;
        Poly::from_coeffs(
            ctx.n(),
            raw.coeffs().iter().map(|c| round_div(c, ctx.delta())),
        )
        .reduce(ctx.plain_modulus())
    }

    fn raw(&self, ciphertext: &Ciphertext, secret_key: &SecretKey) -> BfvResult<Poly> {
        let ctx = &self.context;
        if **ciphertext.context() != **ctx {
            return Err(BfvError::ContextMismatch);
        }
        ctx.check(secret_key.poly())?;
        let masked = ctx.mul(ciphertext.c2(), secret_key.poly());
        Ok(ctx.add(&masked, ciphertext.c1()).reduce(ctx.q()))
    }
}
