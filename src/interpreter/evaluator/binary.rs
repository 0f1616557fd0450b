use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies a binary operator to two evaluated operands.
///
/// `+`, `-`, `*` and `/` follow IEEE double-precision semantics; `^` raises
/// `left` to the power `right`, accepting negative and fractional exponents
/// where the result is real.
///
/// # Parameters
/// - `operator`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `DivisionByZero` for `x / 0` and for `0 ^ n` with negative `n`.
/// - `NonRealResult` for a negative base with a non-integer exponent.
/// - `Overflow` if finite operands produce a non-finite result.
///
/// # Example
/// ```
/// use bodmas::{ast::Operator, error::RuntimeError, interpreter::evaluator::binary::apply};
///
/// assert_eq!(apply(Operator::Pow, 2.0, -1.0), Ok(0.5));
/// assert_eq!(apply(Operator::Div, 5.0, 0.0), Err(RuntimeError::DivisionByZero));
/// ```
pub fn apply(operator: Operator, left: f64, right: f64) -> EvalResult<f64> {
    let value = match operator {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left / right
        },
        Operator::Pow => eval_pow(left, right)?,
    };

    if !value.is_finite() && left.is_finite() && right.is_finite() {
        return Err(RuntimeError::Overflow { operator });
    }
    Ok(value)
}

/// Evaluates `base ^ exponent` over the reals.
fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(RuntimeError::NonRealResult { base, exponent });
    }
    Ok(base.powf(exponent))
}
