use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BfvError {
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Operands were produced under different ring contexts.
    #[error("Ciphertexts belong to different ring contexts")]
    ContextMismatch,

    /// A polynomial does not have exactly n coefficients.
    #[error("Polynomial has {actual} coefficients, the ring expects {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Value {value} needs more than {slots} base-{base} digits")]
    ValueTooLarge { value: u64, base: u64, slots: usize },
}

impl BfvError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

pub type BfvResult<T> = Result<T, BfvError>;
