use tracing::debug;

use crate::{
    ast::{ExpressionNode, ExpressionTree, Operator},
    error::RuntimeError,
    interpreter::evaluator::binary::apply,
};

/// Result type used by the tree builder and the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree.
///
/// Children are evaluated before their parent (post-order), left before
/// right. An empty tree evaluates to `0`.
///
/// # Parameters
/// - `tree`: The tree to evaluate.
///
/// # Returns
/// The numeric value of the tree.
///
/// # Errors
/// Any [`RuntimeError`] raised while applying an operator, such as
/// `DivisionByZero`.
///
/// # Example
/// ```
/// use bodmas::{
///     ast::ExpressionTree,
///     interpreter::{
///         evaluator::core::evaluate,
///         parser::{postfix::to_postfix, tree::build_tree},
///     },
/// };
///
/// let tree = build_tree(&to_postfix("(3 + 4) * 5").unwrap()).unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 35.0);
///
/// assert_eq!(evaluate(&ExpressionTree::empty()).unwrap(), 0.0);
/// ```
pub fn evaluate(tree: &ExpressionTree) -> EvalResult<f64> {
    let value = match tree.root() {
        Some(root) => eval_node(root)?,
        None => 0.0,
    };
    debug!(value, "evaluated expression tree");
    Ok(value)
}

/// A pending step of the post-order walk.
enum Step<'a> {
    Visit(&'a ExpressionNode),
    Apply(Operator),
}

/// Evaluates a single node and its subtree.
///
/// The walk keeps its own stack of pending steps and operand values, so the
/// depth of the tree does not grow the call stack.
///
/// # Errors
/// Propagates the first error raised in the subtree.
///
/// # Example
/// ```
/// use bodmas::{
///     ast::{ExpressionNode, Operator},
///     interpreter::evaluator::core::eval_node,
/// };
///
/// let mut node = ExpressionNode::Operand(1.0);
/// for _ in 0..10_000 {
///     node = ExpressionNode::operator(Operator::Add, node, ExpressionNode::Operand(1.0));
/// }
/// assert_eq!(eval_node(&node), Ok(10_001.0));
/// ```
pub fn eval_node(node: &ExpressionNode) -> EvalResult<f64> {
    let mut steps = vec![Step::Visit(node)];
    let mut values: Vec<f64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(ExpressionNode::Operand(value)) => values.push(*value),
            Step::Visit(ExpressionNode::Operator { operator,
                                                   left,
                                                   right, }) => {
                // Left is popped, and so evaluated, first.
                steps.push(Step::Apply(*operator));
                steps.push(Step::Visit(right));
                steps.push(Step::Visit(left));
            },
            Step::Apply(operator) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    return Err(RuntimeError::MalformedTree { details: format!("operator '{operator}' is missing an operand") });
                };
                values.push(apply(operator, left, right)?);
            },
        }
    }

    values.pop()
          .ok_or_else(|| RuntimeError::MalformedTree { details: "no value was produced".to_string() })
}

impl ExpressionTree {
    /// Evaluates this tree. Shorthand for [`evaluate`].
    ///
    /// # Errors
    /// See [`evaluate`].
    pub fn evaluate(&self) -> EvalResult<f64> {
        evaluate(self)
    }
}
