use tracing::debug;

use crate::{
    ast::Operator,
    error::ValidationError,
    interpreter::lexer::{is_blank, strip_blanks},
};

/// Result type used by the validator and the postfix converter.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted expression, counted in characters once whitespace is
/// removed.
///
/// An expression of this length holds at most 511 operators, so its parse
/// tree stays within [`MAX_TREE_DEPTH`](crate::interpreter::parser::tree::MAX_TREE_DEPTH).
pub const MAX_EXPRESSION_LENGTH: usize = 1024;

/// Checks that `expression` is a well-formed infix arithmetic expression.
///
/// The checks run in a fixed order and stop at the first failure, so exactly
/// one reason is reported:
///
/// 1. the expression is not empty after trimming;
/// 2. every character is a digit, an operator, a parenthesis, `.` or one of
///    the blanks accepted by [`is_blank`];
/// 3. without its whitespace, the expression is at most
///    [`MAX_EXPRESSION_LENGTH`] characters long.
///
/// Whitespace is then discarded, so `12 34` reads as `1234`, and the
/// remaining checks run on what is left:
///
/// 4. no two operators are adjacent;
/// 5. parentheses are balanced;
/// 6. the expression neither starts nor ends with an operator;
/// 7. every number is `digits` or `digits.digits` and fits in a finite `f64`;
/// 8. no number or `)` is directly followed by a number or `(`;
/// 9. no parenthesis group is empty, starts with an operator or ends with
///    one, which rejects `()` and `(+)`.
///
/// The validator is a pure function and evaluates nothing. Every check is a
/// single pass over the text, so nesting depth does not grow the call stack.
///
/// # Parameters
/// - `expression`: The raw expression.
///
/// # Returns
/// `Ok(())` if the expression is accepted.
///
/// # Errors
/// The [`ValidationError`] of the first failing check.
///
/// # Example
/// ```
/// use bodmas::{error::ValidationError, interpreter::validator::validate};
///
/// assert!(validate("(3 + 4) * 5").is_ok());
/// assert!(validate("12 34").is_ok());
/// assert_eq!(validate("3++4"),
///            Err(ValidationError::ConsecutiveOperators { operators: "++".to_string() }));
/// assert_eq!(validate("()"), Err(ValidationError::EmptyExpression));
/// ```
pub fn validate(expression: &str) -> ValidationResult<()> {
    let result = validate_expression(expression);
    if let Err(e) = &result {
        debug!(expression, reason = e.reason(), "expression rejected");
    }
    result
}

fn validate_expression(expression: &str) -> ValidationResult<()> {
    let trimmed = expression.trim_matches(is_blank);
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyExpression);
    }

    check_characters(trimmed)?;

    let compact = strip_blanks(trimmed);
    check_length(&compact)?;
    check_consecutive_operators(&compact)?;
    check_parentheses(&compact)?;
    check_ends(&compact)?;
    check_numbers(&compact)?;
    check_juxtaposition(&compact)?;
    check_groups(&compact)
}

/// Characters that may appear in an expression.
fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || is_structural(c) || is_blank(c)
}

/// Operators and parentheses, the characters that delimit numbers.
fn is_structural(c: char) -> bool {
    Operator::from_symbol(c).is_some() || c == '(' || c == ')'
}

fn is_operator(c: char) -> bool {
    Operator::from_symbol(c).is_some()
}

fn check_characters(expression: &str) -> ValidationResult<()> {
    if let Some(start) = expression.find(|c: char| !is_allowed(c)) {
        let rest = &expression[start..];
        let end = rest.find(is_allowed).unwrap_or(rest.len());
        return Err(ValidationError::InvalidCharacter { run: rest[..end].to_string() });
    }
    Ok(())
}

fn check_length(compact: &str) -> ValidationResult<()> {
    let length = compact.chars().count();
    if length > MAX_EXPRESSION_LENGTH {
        return Err(ValidationError::ExpressionTooLong { length,
                                                        limit: MAX_EXPRESSION_LENGTH });
    }
    Ok(())
}

fn check_consecutive_operators(expression: &str) -> ValidationResult<()> {
    let mut run = String::new();

    for c in expression.chars() {
        if is_operator(c) {
            run.push(c);
        } else if run.len() >= 2 {
            break;
        } else {
            run.clear();
        }
    }

    if run.len() >= 2 {
        return Err(ValidationError::ConsecutiveOperators { operators: run });
    }
    Ok(())
}

fn check_parentheses(expression: &str) -> ValidationResult<()> {
    let mut depth: usize = 0;

    for c in expression.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)
                             .ok_or(ValidationError::UnbalancedParentheses)?;
            },
            _ => {},
        }
    }

    if depth == 0 { Ok(()) } else { Err(ValidationError::UnbalancedParentheses) }
}

fn check_ends(expression: &str) -> ValidationResult<()> {
    let first = expression.chars().next();
    let last = expression.chars().next_back();

    for c in [first, last].into_iter().flatten() {
        if is_operator(c) {
            return Err(ValidationError::LeadingOrTrailingOperator { operator: c });
        }
    }
    Ok(())
}

fn check_numbers(expression: &str) -> ValidationResult<()> {
    for token in expression.split(is_structural)
                           .filter(|s| !s.is_empty())
    {
        if !is_decimal_literal(token) {
            return Err(ValidationError::MalformedNumber { token: token.to_string() });
        }
    }
    Ok(())
}

/// Returns `true` for `digits` and `digits.digits` that parse to a finite
/// value.
fn is_decimal_literal(token: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    let well_formed = match token.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(token),
    };

    well_formed && token.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Coarse lexical classes used to detect juxtaposed operands.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Atom {
    Number,
    Operator,
    Open,
    Close,
}

fn check_juxtaposition(expression: &str) -> ValidationResult<()> {
    let mut atoms: Vec<(Atom, &str)> = Vec::new();
    let mut rest = expression;

    while let Some(c) = rest.chars().next() {
        let (atom, len) = match c {
            '(' => (Atom::Open, 1),
            ')' => (Atom::Close, 1),
            c if is_operator(c) => (Atom::Operator, 1),
            _ => {
                let len = rest.find(is_structural).unwrap_or(rest.len());
                (Atom::Number, len)
            },
        };

        atoms.push((atom, &rest[..len]));
        rest = &rest[len..];
    }

    for pair in atoms.windows(2) {
        let (before, before_text) = pair[0];
        let (after, after_text) = pair[1];

        if matches!(before, Atom::Number | Atom::Close) && matches!(after, Atom::Number | Atom::Open) {
            return Err(ValidationError::MissingOperator { near: format!("{before_text}{after_text}") });
        }
    }

    Ok(())
}

/// Checks what sits just inside every parenthesis pair.
///
/// A group is empty when `(` is directly followed by `)`; its contents start
/// or end with an operator when one directly follows `(` or precedes `)`.
/// Parentheses must already be balanced.
fn check_groups(expression: &str) -> ValidationResult<()> {
    let chars: Vec<char> = expression.chars().collect();

    for pair in chars.windows(2) {
        match (pair[0], pair[1]) {
            ('(', ')') => return Err(ValidationError::EmptyExpression),
            ('(', operator) | (operator, ')') if is_operator(operator) => {
                return Err(ValidationError::LeadingOrTrailingOperator { operator });
            },
            _ => {},
        }
    }

    Ok(())
}

/// Returns `true` if the validator accepts `expression`.
///
/// # Example
/// ```
/// use bodmas::interpreter::validator::is_valid;
///
/// assert!(is_valid("10 / 2 * 3"));
/// assert!(!is_valid("(3+4"));
/// ```
#[must_use]
pub fn is_valid(expression: &str) -> bool {
    validate(expression).is_ok()
}
