use super::{EvaluationKey, PublicKey, SecretKey};
use crate::errors::BfvResult;
use crate::rings::RingContext;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Derives the secret, public and evaluation keys of one session.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    context: Arc<RingContext>,
}

impl KeyGenerator {
    pub fn new(context: Arc<RingContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &Arc<RingContext> {
        &self.context
    }

    #[instrument(skip_all, fields(n = self.context.n()))]
    pub fn generate_secret_key<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretKey {
        debug!("sampling ternary secret key");
        SecretKey::generate(&self.context, rng)
    }

    #[instrument(skip_all, fields(n = self.context.n()))]
    pub fn generate_public_key<R: Rng + ?Sized>(
        &self,
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> BfvResult<PublicKey> {
        let pk = PublicKey::generate(&self.context, secret_key, rng)?;
        debug!(q_bits = self.context.q().bits(), "public key ready");
        Ok(pk)
    }

    /// Generate the relinearization key used by ciphertext multiplication.
    #[instrument(skip_all, fields(n = self.context.n()))]
    pub fn generate_relin_key<R: Rng + ?Sized>(
        &self,
        secret_key: &SecretKey,
        rng: &mut R,
    ) -> BfvResult<EvaluationKey> {
        let ek = EvaluationKey::generate(&self.context, secret_key, rng)?;
        debug!(pq_bits = self.context.pq().bits(), "evaluation key ready");
        Ok(ek)
    }
}
