use thiserror::Error;

/// Errors raised when constructing an [`Interval`](super::Interval).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval minimum {min} is greater than maximum {max}")]
    Inverted { min: String, max: String },

    #[error("Interval bounds {min} and {max} cannot be ordered")]
    Unordered { min: String, max: String },
}
