use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("the model must be fit before calling predict")]
    NotFitted,
}

/// Reasons a training pair is rejected by `fit`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("X has {x_len} entries but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("missing category key at index {index}")]
    MissingKey { index: usize },

    #[error("missing target value at index {index}")]
    MissingValue { index: usize },
}
