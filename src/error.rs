use thiserror::Error;

/// Validation errors.
///
/// Defines every reason the validator can reject a raw expression string:
/// empty input, stray characters, adjacent operators, unbalanced parentheses,
/// dangling operators, malformed number literals and juxtaposed operands.
pub mod validation_error;
/// Runtime errors.
///
/// Contains the errors raised after validation, while the tree is built from
/// the postfix sequence and evaluated: division by zero, malformed trees,
/// non-real powers and numeric overflow.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use validation_error::ValidationError;

/// Any failure of the full pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The validator rejected the expression.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Tree construction or evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The taxonomy name of the underlying failure.
    ///
    /// # Example
    /// ```
    /// use bodmas::error::{Error, RuntimeError};
    ///
    /// let error = Error::from(RuntimeError::DivisionByZero);
    /// assert_eq!(error.reason(), "DivisionByZero");
    /// ```
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.reason(),
            Self::Runtime(e) => e.reason(),
        }
    }
}
