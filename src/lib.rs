//! Leveled BFV-style homomorphic encryption over Z[x]/(x^n + 1).
//!
//! Integers mod `t` are encrypted under a public key, added and multiplied
//! while encrypted, and decrypted with the secret key. Multiplication is
//! followed by relinearization with an evaluation key. There is no
//! bootstrapping, so only a few multiplications fit in the noise budget.

pub mod crypto;
pub mod encoding;
pub mod errors;
pub mod keys;
pub mod math;
pub mod rings;

pub use crypto::{Ciphertext, Decryptor, Encryptor, Operand};
pub use encoding::Encoder;
pub use errors::{BfvError, BfvResult};
pub use keys::{EvaluationKey, KeyGenerator, PublicKey, SecretKey};
pub use rings::{Poly, RingContext, RingContextBuilder};
