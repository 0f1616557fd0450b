use tracing::{debug, trace};

use crate::{
    error::ValidationError,
    interpreter::{
        lexer::{Token, strip_blanks, tokenize},
        validator::ValidationResult,
    },
};

/// An expression in postfix (Reverse Polish) order.
///
/// The sequence never contains parentheses. Evaluating it left to right with
/// a single operand stack leaves exactly one value when it was derived from a
/// validated expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostfixSequence {
    tokens: Vec<Token>,
}

impl PostfixSequence {
    /// Wraps an already ordered list of tokens.
    ///
    /// No ordering checks are made here; the tree builder reports sequences
    /// that do not describe a single tree.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens in postfix order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the sequence holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Each token rendered as text, e.g. `["3", "4", "+"]`.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.tokens.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<Token>> for PostfixSequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// Space separated tokens, e.g. `3 4 + 5 *`.
impl std::fmt::Display for PostfixSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_strings().join(" "))
    }
}

/// Converts an infix expression to postfix order.
///
/// Uses the shunting-yard algorithm. An incoming operator first moves every
/// stacked operator of greater *or equal* precedence to the output, so chains
/// of equal precedence group from the left. This includes `^`: `2^3^2` is
/// read as `(2^3)^2`, unlike the usual mathematical convention.
///
/// Whitespace is removed before tokenizing, so `12 34` is the single number
/// `1234`. The expression must already be accepted by the validator; this
/// function does not repeat those checks.
///
/// # Parameters
/// - `expression`: A validated infix expression.
///
/// # Returns
/// The postfix sequence.
///
/// # Errors
/// - `InvalidCharacter` if the text contains something that is not a token.
/// - `UnbalancedParentheses` if a `)` has no matching `(`.
///
/// # Example
/// ```
/// use bodmas::interpreter::parser::postfix::to_postfix;
///
/// let postfix = to_postfix("34 + 5 * 60 - 8 / 2").unwrap();
/// assert_eq!(postfix.to_string(), "34 5 60 * + 8 2 / -");
///
/// assert_eq!(to_postfix("2^3^2").unwrap().to_string(), "2 3 ^ 2 ^");
/// assert_eq!(to_postfix("1 2 + 3").unwrap().to_string(), "12 3 +");
/// ```
pub fn to_postfix(expression: &str) -> ValidationResult<PostfixSequence> {
    let tokens = tokenize(&strip_blanks(expression)).map_err(|run| ValidationError::InvalidCharacter { run })?;

    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        trace!(%token, stack = stack.len(), "converting token");

        match token {
            Token::Number(_) => output.push(token),
            Token::LParen => stack.push(token),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ValidationError::UnbalancedParentheses),
                }
            },
            Token::Operator(operator) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if top.precedence() < operator.precedence() {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(token);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::Operator(_)) {
            output.push(top);
        }
    }

    let postfix = PostfixSequence::new(output);
    debug!(expression, %postfix, "converted to postfix");
    Ok(postfix)
}
