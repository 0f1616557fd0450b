use thiserror::Error;

use crate::ast::Operator;

/// Represents all errors that can occur while building or evaluating a tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Attempted division by zero, including `0 ^ n` with negative `n`.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The postfix sequence did not describe a single well-formed tree.
    ///
    /// Never caused by validated input; signals a caller that skipped the
    /// validator.
    #[error("Malformed parse tree: {details}.")]
    MalformedTree {
        /// What was wrong with the sequence.
        details: String,
    },
    /// The tree would be nested deeper than the builder allows.
    ///
    /// Never caused by validated input, whose length bounds the depth.
    #[error("Parse tree deeper than {limit} levels.")]
    TreeTooDeep {
        /// The deepest accepted tree.
        limit: usize,
    },
    /// A negative base raised to a non-integer exponent.
    #[error("{base} ^ {exponent} has no real result.")]
    NonRealResult {
        /// The base.
        base:     f64,
        /// The exponent.
        exponent: f64,
    },
    /// An operation on finite values produced an infinite or NaN result.
    #[error("Numeric overflow while computing '{operator}'.")]
    Overflow {
        /// The operator whose result left the finite range.
        operator: Operator,
    },
}

impl RuntimeError {
    /// The name of this failure, e.g. `"DivisionByZero"`.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DivisionByZero",
            Self::MalformedTree { .. } => "MalformedTree",
            Self::TreeTooDeep { .. } => "TreeTooDeep",
            Self::NonRealResult { .. } => "NonRealResult",
            Self::Overflow { .. } => "Overflow",
        }
    }
}
