use tracing::debug;

use crate::{
    ast::{ExpressionNode, ExpressionTree},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, parser::postfix::PostfixSequence},
};

/// Deepest tree [`build_tree`] produces, counting nodes on the longest
/// root-to-leaf path.
///
/// Serializing and displaying a tree recurse once per level, so the builder
/// refuses anything deeper. Validated expressions never come close.
pub const MAX_TREE_DEPTH: usize = 512;

/// Builds a parse tree from a postfix sequence.
///
/// Operands are pushed onto a node stack. An operator pops its *right*
/// operand first and its *left* operand second, then pushes the combined
/// node. The single node left at the end becomes the root. An empty sequence
/// produces an empty tree, which evaluates to zero.
///
/// # Parameters
/// - `postfix`: A sequence produced by `to_postfix` from a validated
///   expression.
///
/// # Returns
/// The expression tree.
///
/// # Errors
/// `MalformedTree` if an operator lacks operands, operands are left over, or
/// the sequence contains a parenthesis. None of these arise from validated
/// input.
///
/// `TreeTooDeep` if the tree would exceed [`MAX_TREE_DEPTH`].
///
/// # Example
/// ```
/// use bodmas::{
///     ast::{ExpressionNode, Operator},
///     interpreter::parser::{postfix::to_postfix, tree::build_tree},
/// };
///
/// let tree = build_tree(&to_postfix("8 - 2").unwrap()).unwrap();
/// assert_eq!(tree.root(),
///            Some(&ExpressionNode::operator(Operator::Sub,
///                                           ExpressionNode::Operand(8.0),
///                                           ExpressionNode::Operand(2.0))));
///
/// assert!(build_tree(&Default::default()).unwrap().is_empty());
/// ```
pub fn build_tree(postfix: &PostfixSequence) -> EvalResult<ExpressionTree> {
    // Each entry carries the depth of its subtree.
    let mut stack: Vec<(ExpressionNode, usize)> = Vec::with_capacity(postfix.len());

    for token in postfix.tokens() {
        match *token {
            Token::Number(value) => stack.push((ExpressionNode::Operand(value), 1)),
            Token::Operator(operator) => {
                let (Some((right, right_depth)), Some((left, left_depth))) = (stack.pop(), stack.pop())
                else {
                    return Err(RuntimeError::MalformedTree { details: format!("operator '{operator}' is missing an operand") });
                };

                let depth = 1 + left_depth.max(right_depth);
                if depth > MAX_TREE_DEPTH {
                    return Err(RuntimeError::TreeTooDeep { limit: MAX_TREE_DEPTH });
                }
                stack.push((ExpressionNode::operator(operator, left, right), depth));
            },
            Token::LParen | Token::RParen => {
                return Err(RuntimeError::MalformedTree { details: format!("unexpected '{token}' in postfix sequence") });
            },
        }
    }

    let root = stack.pop().map(|(node, _)| node);
    if !stack.is_empty() {
        return Err(RuntimeError::MalformedTree { details: format!("{} operands are missing an operator",
                                                                  stack.len() + 1) });
    }

    let tree = ExpressionTree::new(root);
    debug!(nodes = tree.root().map_or(0, ExpressionNode::node_count),
           "built expression tree");
    Ok(tree)
}
