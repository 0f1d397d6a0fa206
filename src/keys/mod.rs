pub mod keygen;
pub mod public_key;
pub mod relin_key;
pub mod secret_key;

pub use keygen::KeyGenerator;
pub use public_key::PublicKey;
pub use relin_key::EvaluationKey;
pub use secret_key::SecretKey;
