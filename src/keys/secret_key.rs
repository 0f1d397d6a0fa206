//! Secret key (sk): a ternary polynomial with coefficients in {-1, 0, 1}.
use crate::math::ternary_poly;
use crate::rings::{Poly, RingContext};
use rand::Rng;

/// Created once per session and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SecretKey {
    poly: Poly,
}

impl SecretKey {
    pub fn generate<R: Rng + ?Sized>(context: &RingContext, rng: &mut R) -> Self {
        Self {
            poly: ternary_poly(context.n(), rng),
        }
    }

    pub fn poly(&self) -> &Poly {
        &self.poly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::RingContextBuilder;
    use num_traits::ToPrimitive;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn secret_key_is_ternary_of_ring_degree() {
        let ctx = RingContextBuilder::reference().build().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let sk = SecretKey::generate(&ctx, &mut rng);

        assert_eq!(sk.poly().len(), ctx.n());
        for c in sk.poly() {
            let c = c.to_i64().unwrap();
            assert!(
                (-1..=1).contains(&c),
                "Coefficient value should be 0, 1, or -1"
            );
        }
    }
}
