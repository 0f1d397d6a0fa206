use crate::errors::BfvResult;
use crate::keys::SecretKey;
use crate::math::{gaussian_poly, uniform_poly};
use crate::rings::{Poly, RingContext};
use rand::Rng;

/// RLWE public key over Z_q.
///
/// `pk1 = -(pk2 * sk + e) mod q` for a small Gaussian `e`, so
/// `pk1 + pk2 * sk` is only noise.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicKey {
    pk1: Poly,
    pk2: Poly,
}

impl PublicKey {
    /// 1. Sample `a` uniformly from Z_q.
    /// 2. Sample `e` from the rounded Gaussian.
    /// 3. `pk1 = (-(a * sk) - e) mod q`, `pk2 = a`.
    pub fn generate<R: Rng + ?Sized>(
        context: &RingContext,
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> BfvResult<Self> {
        context.check(secret_key.poly())?;
        let n = context.n();

        let a = uniform_poly(n, context.q(), rng);
        let e = gaussian_poly(n, context.mean(), context.scale(), rng)?;

        let neg_a_s = context.mul(&-&a, secret_key.poly());
        let pk1 = context.add(&neg_a_s, &-e).reduce(context.q());

        Ok(Self { pk1, pk2: a })
    }

    pub fn pk1(&self) -> &Poly {
        &self.pk1
    }

    pub fn pk2(&self) -> &Poly {
        &self.pk2
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
    fn public_key_hides_only_small_noise() {
        let ctx = RingContextBuilder::reference().build().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let sk = SecretKey::generate(&ctx, &mut rng);
        let pk = PublicKey::generate(&ctx, &sk, &mut rng).unwrap();

        // pk1 + pk2 * sk = -e (mod q)
        let relation = ctx.add(pk.pk1(), &ctx.mul(pk.pk2(), sk.poly()));
        let noise = relation.centered(ctx.q());
        assert!(
            noise.infinity_norm() <= BigInt::from(32),
            "public key noise too large: {:?}",
            noise
        );
    }

    #[test]
    fn components_are_reduced_mod_q() {
        let ctx = RingContextBuilder::reference().build().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let sk = SecretKey::generate(&ctx, &mut rng);
        let pk = PublicKey::generate(&ctx, &sk, &mut rng).unwrap();
        for c in pk.pk1().coeffs().iter().chain(pk.pk2().coeffs()) {
            assert!(*c >= BigInt::from(0) && c < ctx.q());
        }
    }
}
