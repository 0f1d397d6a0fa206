use super::Ciphertext;
use crate::encoding::Encoder;
use crate::errors::BfvResult;
use crate::keys::{EvaluationKey, PublicKey};
use crate::math::{gaussian_poly, ternary_poly};
use crate::rings::{Poly, RingContext};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct Encryptor {
    context: Arc<RingContext>,
    encoder: Encoder,
}

impl Encryptor {
    pub fn new(context: Arc<RingContext>) -> Self {
        let encoder = Encoder::new(Arc::clone(&context));
        Self { context, encoder }
    }

    /// Encrypts `value mod t` in the constant slot.
    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        value: i64,
        public_key: &PublicKey,
        evaluation_key: &Arc<EvaluationKey>,
        rng: &mut R,
    ) -> BfvResult<Ciphertext> {
        let m = self.encoder.encode(value);
        self.encrypt_plaintext(&m, public_key, evaluation_key, rng)
    }

    /// Encrypts the base-b digits of `value`, with `b` the context's encode
    /// base.
    pub fn encrypt_base<R: Rng + ?Sized>(
        &self,
        value: u64,
        public_key: &PublicKey,
        evaluation_key: &Arc<EvaluationKey>,
        rng: &mut R,
    ) -> BfvResult<Ciphertext> {
        let m = self
            .encoder
            .encode_base(value, self.context.encode_base())?;
        self.encrypt_plaintext(&m, public_key, evaluation_key, rng)
    }

    /// Encrypts a whole plaintext polynomial, coefficients taken mod t.
    ///
    /// With `u` ternary and `e1`, `e2` Gaussian:
    /// * `c1 = (pk1 * u + e1 + δ * m) mod q`
    /// * `c2 = (pk2 * u + e2) mod q`
    #[instrument(skip_all, fields(n = self.context.n()))]
    pub fn encrypt_plaintext<R: Rng + ?Sized>(
        &self,
        plaintext: &Poly,
        public_key: &PublicKey,
        evaluation_key: &Arc<EvaluationKey>,
        rng: &mut R,
    ) -> BfvResult<Ciphertext> {
        let ctx = &self.context;
        ctx.check(plaintext)?;
        let (n, q) = (ctx.n(), ctx.q());

        let m = plaintext.reduce(ctx.plain_modulus());
        let u = ternary_poly(n, rng);
        let e1 = gaussian_poly(n, ctx.mean(), ctx.scale(), rng)?;
        let e2 = gaussian_poly(n, ctx.mean(), ctx.scale(), rng)?;

        let masked = ctx.add(&ctx.mul(public_key.pk1(), &u), &e1);
        let c1 = ctx.add(&masked, &m.scalar_mul(ctx.delta())).reduce(q);
        let c2 = ctx.add(&ctx.mul(public_key.pk2(), &u), &e2).reduce(q);

        debug!("encrypted plaintext");
        Ok(Ciphertext::new(
            c1,
            c2,
            Arc::clone(ctx),
            Arc::clone(evaluation_key),
        ))
    }
}
