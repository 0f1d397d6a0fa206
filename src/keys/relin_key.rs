use crate::errors::BfvResult;
use crate::keys::SecretKey;
use crate::math::{gaussian_poly, uniform_poly};
use crate::rings::{Poly, RingContext};
use rand::Rng;

/// Relinearization (evaluation) key over Z_{p·q}.
///
/// Satisfies `rlk1 + rlk2 * sk = p * sk^2 - e (mod p·q)`. Multiplying the
/// `sk^2` component of a degree-2 ciphertext by this key and dividing by `p`
/// re-expresses it in terms of `sk` alone, with noise shrunk by `1/p`.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationKey {
    rlk1: Poly,
    rlk2: Poly,
}

impl EvaluationKey {
    /// 1. Sample `r2` uniformly from Z_{p·q} and `e` from the Gaussian.
    /// 2. `sk2 = sk * sk`, reduced by `x^n + 1` only.
    /// 3. `rlk1 = (-(r2 * sk) - e + p * sk2) mod p·q`, `rlk2 = r2`.
    pub fn generate<R: Rng + ?Sized>(
        context: &RingContext,
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> BfvResult<Self> {
        context.check(secret_key.poly())?;
        let n = context.n();
        let s = secret_key.poly();

        let r2 = uniform_poly(n, context.pq(), rng);
        let e = gaussian_poly(n, context.mean(), context.scale(), rng)?;
        let sk2 = context.mul(s, s);

        let masked = context.add(&context.mul(&-&r2, s), &-e);
        let rlk1 = context
            .add(&masked, &sk2.scalar_mul(context.p()))
            .reduce(context.pq());

        Ok(Self { rlk1, rlk2: r2 })
    }

    pub fn rlk1(&self) -> &Poly {
        &self.rlk1
    }

    pub fn rlk2(&self) -> &Poly {
        &self.rlk2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::RingContextBuilder;
    use num_bigint::BigInt;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn evaluation_key_encodes_p_times_sk_squared() {
        let ctx = RingContextBuilder::reference().build().unwrap();
        let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
        let sk = SecretKey::generate(&ctx, &mut rng);
        let ek = EvaluationKey::generate(&ctx, &sk, &mut rng).unwrap();

        // rlk1 + rlk2 * sk - p * sk^2 = -e (mod p·q)
        let s = sk.poly();
        let sk2 = ctx.mul(s, s);
        let lhs = ctx.add(ek.rlk1(), &ctx.mul(ek.rlk2(), s));
        let diff = ctx.add(&lhs, &-sk2.scalar_mul(ctx.p()));
        let noise = diff.centered(ctx.pq());

        assert!(
            noise.infinity_norm() <= BigInt::from(32),
            "evaluation key noise too large: {:?}",
            noise
        );
    }

    #[test]
    fn components_live_mod_pq() {
        let ctx = RingContextBuilder::reference().build().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(17);
        let sk = SecretKey::generate(&ctx, &mut rng);
        let ek = EvaluationKey::generate(&ctx, &sk, &mut rng).unwrap();
        for c in ek.rlk1().coeffs().iter().chain(ek.rlk2().coeffs()) {
            assert!(*c >= BigInt::from(0) && c < ctx.pq());
        }
        // The mask is drawn from the whole of Z_{p·q}, far past q.
        assert!(ek.rlk2().coeffs().iter().any(|c| c > ctx.q()));
    }
}
