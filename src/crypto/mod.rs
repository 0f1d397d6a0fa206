//! Encryption, decryption and homomorphic evaluation.

pub mod ciphertext;
pub mod decryptor;
pub mod encryptor;
mod relinearize;

pub use ciphertext::{Ciphertext, Operand};
pub use decryptor::Decryptor;
pub use encryptor::Encryptor;
