use crate::keys::EvaluationKey;
use crate::rings::{Poly, RingContext};
use num_bigint::BigInt;
use num_traits::One;

/// Degree-2 ciphertext: decrypts as `d1 + d2 * sk + d3 * sk^2`.
#[derive(Debug, Clone)]
pub(crate) struct DegreeTwo {
    pub d1: Poly,
    pub d2: Poly,
    pub d3: Poly,
}

/// Folds the `sk^2` term back into a degree-1 ciphertext.
///
/// `rlk1 + rlk2 * sk = p * sk^2 - e (mod p·q)`, so
/// `round(rlk1 * d3 / p) + round(rlk2 * d3 / p) * sk = d3 * sk^2 (mod q)`
/// up to `e * d3 / p` plus rounding error. The `p·q` wrap becomes a multiple
/// of `q` after the division and disappears mod q.
pub(crate) fn relinearize(
    ctx: &RingContext,
    key: &EvaluationKey,
    ct: DegreeTwo,
) -> (Poly, Poly) {
    let q = ctx.q();
    let one = BigInt::one();
    let e1 = ctx.mul(key.rlk1(), &ct.d3).scale_round(&one, ctx.p()).reduce(q);
    let e2 = ctx.mul(key.rlk2(), &ct.d3).scale_round(&one, ctx.p()).reduce(q);

    (
        ctx.add(&ct.d1, &e1).reduce(q),
        ctx.add(&ct.d2, &e2).reduce(q),
    )
}
