use serde::Serialize;

use crate::{
    ast::ExpressionTree,
    error::Error,
    interpreter::{lexer::is_blank, parser::postfix::PostfixSequence},
};

/// Everything the pipeline derives from an accepted expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The expression in postfix order.
    pub postfix: PostfixSequence,
    /// The parse tree built from `postfix`.
    pub tree:    ExpressionTree,
    /// The value of `tree`.
    pub result:  f64,
}

/// The serializable answer handed to callers outside the crate.
///
/// A failed expression always carries `error` and `reason`, an empty
/// `postfix`, an empty `tree` and a zero `result`; a successful one never
/// carries an error.
///
/// # Example
/// ```
/// use bodmas::parse_and_evaluate;
///
/// let json = serde_json::to_value(parse_and_evaluate("3+4")).unwrap();
/// assert_eq!(json["postfix"], serde_json::json!(["3", "4", "+"]));
/// assert_eq!(json["tree"]["operator"], "+");
/// assert_eq!(json["result"], 7.0);
/// assert!(json["error"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// The expression with leading and trailing whitespace removed. Inner
    /// whitespace is kept as received.
    pub input_expression: String,
    /// `true` if the whole pipeline succeeded.
    pub valid:            bool,
    /// Postfix tokens rendered as strings.
    pub postfix:          Vec<String>,
    /// The parse tree in its JSON form.
    pub tree:             ExpressionTree,
    /// The computed value, `0` on failure.
    pub result:           f64,
    /// A human readable description of the failure.
    pub error:            Option<String>,
    /// The failure's taxonomy name, e.g. `"DivisionByZero"`.
    pub reason:           Option<String>,
}

impl Evaluation {
    /// Builds the answer for an expression that went through the pipeline.
    #[must_use]
    pub fn success(expression: &str, outcome: Outcome) -> Self {
        Self { input_expression: expression.trim_matches(is_blank).to_string(),
               valid:            true,
               postfix:          outcome.postfix.to_strings(),
               tree:             outcome.tree,
               result:           outcome.result,
               error:            None,
               reason:           None, }
    }

    /// Builds the answer for an expression that failed at any stage.
    #[must_use]
    pub fn failure(expression: &str, error: &Error) -> Self {
        Self { input_expression: expression.trim_matches(is_blank).to_string(),
               valid:            false,
               postfix:          Vec::new(),
               tree:             ExpressionTree::empty(),
               result:           0.0,
               error:            Some(error.to_string()),
               reason:           Some(error.reason().to_string()), }
    }

    /// Converts the pipeline's typed result into an answer.
    #[must_use]
    pub fn from_result(expression: &str, result: Result<Outcome, Error>) -> Self {
        match result {
            Ok(outcome) => Self::success(expression, outcome),
            Err(e) => Self::failure(expression, &e),
        }
    }
}
