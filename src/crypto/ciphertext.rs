//! BFV ciphertexts and the homomorphic operators on them.
//!
//! A ciphertext `(c1, c2)` over Z_q decrypts through
//! `c1 + c2 * sk = δ * m + v (mod q)`; it stays correct while `|v| < q / 2t`.
//! Every operator returns a new ciphertext and leaves its inputs alone.

use super::relinearize::{DegreeTwo, relinearize};
use crate::errors::{BfvError, BfvResult};
use crate::keys::EvaluationKey;
use crate::rings::{Poly, RingContext};
use num_bigint::BigInt;
use num_integer::Integer;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Ciphertext {
    c1: Poly,
    c2: Poly,
    context: Arc<RingContext>,
    evaluation_key: Arc<EvaluationKey>,
}

/// Right-hand side of a homomorphic `add` / `mul`.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Ciphertext(&'a Ciphertext),
    Plain(i64),
}

impl<'a> From<&'a Ciphertext> for Operand<'a> {
    fn from(ct: &'a Ciphertext) -> Self {
        Operand::Ciphertext(ct)
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Operand::Plain(value)
    }
}

impl Ciphertext {
    pub(crate) fn new(
        c1: Poly,
        c2: Poly,
        context: Arc<RingContext>,
        evaluation_key: Arc<EvaluationKey>,
    ) -> Self {
        Self {
            c1,
            c2,
            context,
            evaluation_key,
        }
    }

    pub fn c1(&self) -> &Poly {
        &self.c1
    }

    pub fn c2(&self) -> &Poly {
        &self.c2
    }

    pub fn context(&self) -> &Arc<RingContext> {
        &self.context
    }

    pub fn evaluation_key(&self) -> &Arc<EvaluationKey> {
        &self.evaluation_key
    }

    /// `self + rhs` for a ciphertext or a plaintext integer.
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> BfvResult<Self> {
        match rhs.into() {
            Operand::Ciphertext(other) => self.add_ciphertext(other),
            Operand::Plain(k) => Ok(self.add_plain(k)),
        }
    }

    /// `self * rhs` for a ciphertext or a plaintext integer.
    pub fn mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> BfvResult<Self> {
        match rhs.into() {
            Operand::Ciphertext(other) => self.mul_ciphertext(other),
            Operand::Plain(k) => Ok(self.mul_plain(k)),
        }
    }

    /// Component-wise sum mod q. Noise adds.
    pub fn add_ciphertext(&self, other: &Ciphertext) -> BfvResult<Self> {
        self.ensure_same_context(other)?;
        let ctx = &self.context;
        let q = ctx.q();
        Ok(self.with_components(
            ctx.add(&self.c1, &other.c1).reduce(q),
            ctx.add(&self.c2, &other.c2).reduce(q),
        ))
    }

    /// Adds `δ * (k mod t)` to `c1`. No fresh randomness and no extra noise.
    pub fn add_plain(&self, k: i64) -> Self {
        let ctx = &self.context;
        let m = self.plain_constant(k);
        let scaled = Poly::constant_term(ctx.n(), m * ctx.delta());
        self.with_components(ctx.add(&self.c1, &scaled).reduce(ctx.q()), self.c2.clone())
    }

    /// Multiplies both components by `k mod t`, without the `δ` factor.
    /// Noise grows by roughly `|k mod t|`.
    pub fn mul_plain(&self, k: i64) -> Self {
        let ctx = &self.context;
        let q = ctx.q();
        let m = Poly::constant_term(ctx.n(), self.plain_constant(k));
        self.with_components(
            ctx.mul(&self.c1, &m).reduce(q),
            ctx.mul(&self.c2, &m).reduce(q),
        )
    }

    /// Tensor product scaled by `t/q`, then relinearized back to two
    /// components with this ciphertext's evaluation key.
    pub fn mul_ciphertext(&self, other: &Ciphertext) -> BfvResult<Self> {
        self.ensure_same_context(other)?;
        let ctx = &self.context;
        let (q, t) = (ctx.q(), ctx.plain_modulus());
        let rescale = |poly: Poly| poly.scale_round(t, q).reduce(q);

        let d1 = rescale(ctx.mul(&self.c1, &other.c1));
        let d2 = rescale(ctx.add(
            &ctx.mul(&self.c1, &other.c2),
            &ctx.mul(&self.c2, &other.c1),
        ));
        let d3 = rescale(ctx.mul(&self.c2, &other.c2));

        debug!(n = ctx.n(), "relinearizing degree-2 product");
        let (c1, c2) = relinearize(ctx, &self.evaluation_key, DegreeTwo { d1, d2, d3 });
        Ok(self.with_components(c1, c2))
    }

    fn plain_constant(&self, k: i64) -> BigInt {
        BigInt::from(k).mod_floor(self.context.plain_modulus())
    }

    fn with_components(&self, c1: Poly, c2: Poly) -> Self {
        Self::new(
            c1,
            c2,
            Arc::clone(&self.context),
            Arc::clone(&self.evaluation_key),
        )
    }

    fn ensure_same_context(&self, other: &Ciphertext) -> BfvResult<()> {
        if Arc::ptr_eq(&self.context, &other.context) || self.context == other.context {
            Ok(())
        } else {
            Err(BfvError::ContextMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{Decryptor, Encryptor};
    use crate::keys::{KeyGenerator, SecretKey};
    use crate::rings::RingContextBuilder;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    struct Session {
        sk: SecretKey,
        encryptor: Encryptor,
        decryptor: Decryptor,
        pk: crate::keys::PublicKey,
        ek: Arc<EvaluationKey>,
        rng: ChaCha20Rng,
    }

    fn session(seed: u64) -> Session {
        let ctx = Arc::new(RingContextBuilder::reference().build().unwrap());
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keygen = KeyGenerator::new(Arc::clone(&ctx));
        let sk = keygen.generate_secret_key(&mut rng);
        let pk = keygen.generate_public_key(&sk, &mut rng).unwrap();
        let ek = Arc::new(keygen.generate_relin_key(&sk, &mut rng).unwrap());
        Session {
            sk,
            encryptor: Encryptor::new(Arc::clone(&ctx)),
            decryptor: Decryptor::new(ctx),
            pk,
            ek,
            rng,
        }
    }

    #[test]
    fn operators_leave_inputs_untouched() {
        let mut s = session(11);
        let ct = s.encryptor.encrypt(5, &s.pk, &s.ek, &mut s.rng).unwrap();
        let snapshot = ct.clone();

        let _ = ct.add_plain(3);
        let _ = ct.mul_plain(3);
        let _ = ct.add_ciphertext(&snapshot).unwrap();
        let _ = ct.mul_ciphertext(&snapshot).unwrap();

        assert_eq!(ct, snapshot);
        assert_eq!(s.decryptor.decrypt(&ct, &s.sk).unwrap(), 5);
    }

    #[test]
    fn operand_dispatch_matches_explicit_calls() {
        let mut s = session(12);
        let a = s.encryptor.encrypt(7, &s.pk, &s.ek, &mut s.rng).unwrap();
        let b = s.encryptor.encrypt(3, &s.pk, &s.ek, &mut s.rng).unwrap();

        assert_eq!(a.add(&b).unwrap(), a.add_ciphertext(&b).unwrap());
        assert_eq!(a.add(4i64).unwrap(), a.add_plain(4));
        assert_eq!(a.mul(&b).unwrap(), a.mul_ciphertext(&b).unwrap());
        assert_eq!(a.mul(4i64).unwrap(), a.mul_plain(4));
    }

    #[test]
    fn plaintext_operands_are_taken_mod_t() {
        let mut s = session(13);
        let ct = s.encryptor.encrypt(10, &s.pk, &s.ek, &mut s.rng).unwrap();
        assert_eq!(ct.add_plain(-3), ct.add_plain(29));
        assert_eq!(ct.mul_plain(35), ct.mul_plain(3));
        assert_eq!(s.decryptor.decrypt(&ct.add_plain(-3), &s.sk).unwrap(), 7);
    }

    #[test]
    fn mixing_contexts_is_a_usage_error() {
        let mut s = session(14);
        let ct = s.encryptor.encrypt(1, &s.pk, &s.ek, &mut s.rng).unwrap();

        let other_ctx = Arc::new(
            RingContext::builder(16, BigInt::from(1u64 << 19), 32)
                .build()
                .unwrap(),
        );
        let keygen = KeyGenerator::new(Arc::clone(&other_ctx));
        let sk = keygen.generate_secret_key(&mut s.rng);
        let pk = keygen.generate_public_key(&sk, &mut s.rng).unwrap();
        let ek = Arc::new(keygen.generate_relin_key(&sk, &mut s.rng).unwrap());
        let foreign = Encryptor::new(other_ctx)
            .encrypt(1, &pk, &ek, &mut s.rng)
            .unwrap();

        assert_eq!(ct.add(&foreign), Err(BfvError::ContextMismatch));
        assert_eq!(ct.mul(&foreign), Err(BfvError::ContextMismatch));
        assert_eq!(s.decryptor.decrypt(&foreign, &s.sk), Err(BfvError::ContextMismatch));
    }
}
