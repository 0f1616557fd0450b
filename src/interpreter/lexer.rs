use logos::Logos;

use crate::ast::Operator;

/// Represents a lexical token of an arithmetic expression.
///
/// Whether a token is a number, an operator or a parenthesis is decided once
/// here; later stages never re-classify text.
///
/// The skipped characters are exactly those accepted by [`is_blank`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// One of `+ - * / ^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Splits `source` into tokens, discarding whitespace.
///
/// # Parameters
/// - `source`: The raw expression.
///
/// # Returns
/// - `Ok(Vec<Token>)`: The tokens in source order.
/// - `Err(slice)`: The first piece of text that is not a token.
///
/// # Example
/// ```
/// use bodmas::{
///     ast::Operator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("3.5 * (2)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(3.5),
///                 Token::Operator(Operator::Mul),
///                 Token::LParen,
///                 Token::Number(2.0),
///                 Token::RParen]);
/// assert_eq!(tokenize("3 + x"), Err("x".to_string()));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(lexer.slice().to_string()),
        }
    }

    Ok(tokens)
}

/// Returns `true` for the whitespace an expression may contain: space, tab,
/// carriage return, line feed and form feed.
///
/// Any other whitespace, such as a no-break space or a vertical tab, is an
/// invalid character.
#[must_use]
pub const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

/// Removes every blank from `source`, so that digits separated only by
/// whitespace form a single number.
///
/// # Example
/// ```
/// use bodmas::interpreter::lexer::strip_blanks;
///
/// assert_eq!(strip_blanks(" 12 34\t+ 5 "), "1234+5");
/// assert_eq!(strip_blanks("3\u{a0}+4"), "3\u{a0}+4");
/// ```
#[must_use]
pub fn strip_blanks(source: &str) -> String {
    source.chars().filter(|&c| !is_blank(c)).collect()
}

/// Parses a numeric literal from the current token slice.
///
/// Literals that overflow to infinity are not tokens.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|value| value.is_finite())
}
