//! # bodmas
//!
//! bodmas evaluates arithmetic expressions written in infix notation.
//! Expressions are made of decimal numbers, the operators `+ - * / ^` and
//! parentheses. Each expression is validated, converted to postfix order,
//! turned into a binary parse tree and evaluated over `f64`.
//!
//! Operators of equal precedence group from the left. This includes `^`, so
//! `2^3^2` is `(2^3)^2 = 64` rather than the conventional `2^(3^2) = 512`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::info;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::evaluate,
        parser::{postfix::to_postfix, tree::build_tree},
        validator::validate,
    },
    report::{Evaluation, Outcome},
};

/// Defines the parse tree.
///
/// This module declares the `Operator` enum with its fixed precedence, and
/// the `ExpressionNode`/`ExpressionTree` types built from postfix sequences.
///
/// # Responsibilities
/// - Models operands as leaves and operators as nodes owning two children.
/// - Serializes trees to their JSON form for inspection.
pub mod ast;
/// Provides the error types of every stage.
///
/// Validation errors are reported before any transformation happens. Runtime
/// errors come from tree construction and evaluation. Every error carries a
/// stable taxonomy name next to its message.
pub mod error;
/// Orchestrates the stages of the pipeline.
///
/// This module ties together lexing, validation, postfix conversion, tree
/// construction and evaluation.
///
/// # Responsibilities
/// - Rejects malformed input before it reaches the converter.
/// - Resolves precedence and grouping into a parse tree.
/// - Computes the numeric result of a tree.
pub mod interpreter;
/// Pipeline results for callers outside the crate.
///
/// `Outcome` is the typed result of a successful run and `Evaluation` the
/// serializable answer for both successful and failed runs.
pub mod report;

pub use interpreter::validator::is_valid;

/// Runs the full pipeline on `expression`.
///
/// The expression is validated, converted to postfix order, built into a
/// tree and evaluated. Stages after the validator only see accepted input.
///
/// # Errors
/// Returns the validator's rejection, or the error raised while building or
/// evaluating the tree.
///
/// # Examples
/// ```
/// use bodmas::evaluate_expression;
///
/// let outcome = evaluate_expression("3 + 4 * 5").unwrap();
/// assert_eq!(outcome.result, 23.0);
/// assert_eq!(outcome.postfix.to_string(), "3 4 5 * +");
///
/// let error = evaluate_expression("5/0").unwrap_err();
/// assert_eq!(error.reason(), "DivisionByZero");
/// ```
pub fn evaluate_expression(expression: &str) -> Result<Outcome, Error> {
    validate(expression)?;

    let postfix = to_postfix(expression)?;
    let tree = build_tree(&postfix)?;
    let result = evaluate(&tree)?;

    info!(expression, result, "evaluated expression");
    Ok(Outcome { postfix,
                 tree,
                 result })
}

/// Runs the full pipeline and returns a serializable answer.
///
/// Failures are folded into the answer instead of being returned as errors,
/// so this function never fails.
///
/// # Examples
/// ```
/// use bodmas::parse_and_evaluate;
///
/// let answer = parse_and_evaluate("(3+4)*5");
/// assert!(answer.valid);
/// assert_eq!(answer.result, 35.0);
///
/// let answer = parse_and_evaluate("3++4");
/// assert!(!answer.valid);
/// assert_eq!(answer.reason.as_deref(), Some("ConsecutiveOperators"));
/// assert_eq!(answer.result, 0.0);
/// ```
#[must_use]
pub fn parse_and_evaluate(expression: &str) -> Evaluation {
    Evaluation::from_result(expression, evaluate_expression(expression))
}
