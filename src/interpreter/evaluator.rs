/// Core evaluation logic.
///
/// Walks an expression tree in post-order and defines the evaluator's result
/// type.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic of `+ - * / ^` over `f64`, including the checks
/// for division by zero, non-real powers and overflow.
pub mod binary;
