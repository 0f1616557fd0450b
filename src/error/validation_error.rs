use thiserror::Error;

/// Represents every reason the validator can reject an expression.
///
/// Exactly one reason is reported per rejected expression: the validator
/// stops at the first failing check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The expression is empty or whitespace only.
    #[error("Expression cannot be empty.")]
    EmptyExpression,
    /// A character outside digits, operators, parentheses, `.` and the
    /// blanks space, tab, carriage return, line feed and form feed.
    #[error("Invalid characters '{run}' in expression. Only +, -, *, /, ^, decimal numbers and () are allowed.")]
    InvalidCharacter {
        /// The run of offending characters, starting at the first one.
        run: String,
    },
    /// The expression, whitespace removed, exceeds the length limit.
    #[error("Expression is {length} characters long; at most {limit} are allowed.")]
    ExpressionTooLong {
        /// Characters in the expression, whitespace removed.
        length: usize,
        /// The largest accepted length.
        limit:  usize,
    },
    /// Two operator symbols with no operand or parenthesis between them.
    #[error("Consecutive operators '{operators}' are not allowed.")]
    ConsecutiveOperators {
        /// The adjacent operators, whitespace removed.
        operators: String,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("Parentheses are not balanced.")]
    UnbalancedParentheses,
    /// The expression starts or ends with an operator symbol.
    #[error("Expression cannot start or end with the operator '{operator}'.")]
    LeadingOrTrailingOperator {
        /// The offending operator.
        operator: char,
    },
    /// A numeric literal that is not `digits` or `digits.digits`, or that
    /// does not fit in a finite `f64`.
    #[error("Invalid number in expression: {token}. Please use valid decimal numbers.")]
    MalformedNumber {
        /// The malformed literal.
        token: String,
    },
    /// Two operands, or an operand and a group, written next to each other.
    #[error("Missing operator in '{near}'.")]
    MissingOperator {
        /// The juxtaposed text, whitespace removed.
        near: String,
    },
}

impl ValidationError {
    /// The name of this rejection reason, e.g. `"ConsecutiveOperators"`.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::EmptyExpression => "EmptyExpression",
            Self::InvalidCharacter { .. } => "InvalidCharacter",
            Self::ExpressionTooLong { .. } => "ExpressionTooLong",
            Self::ConsecutiveOperators { .. } => "ConsecutiveOperators",
            Self::UnbalancedParentheses => "UnbalancedParentheses",
            Self::LeadingOrTrailingOperator { .. } => "LeadingOrTrailingOperator",
            Self::MalformedNumber { .. } => "MalformedNumber",
            Self::MissingOperator { .. } => "MissingOperator",
        }
    }
}
