//! Pure binary evaluation.
//!
//! Degenerate input never fails here: missing operands, missing operators
//! and division by zero all collapse into the sentinel result `0`.

use super::operator::Operator;

/// Sentinel returned when an evaluation cannot be carried out.
pub const SENTINEL: f64 = 0.0;

/// Evaluate `lhs <operator> rhs`.
///
/// Returns [`SENTINEL`] when any input is absent or when dividing by zero.
/// Callers cannot tell a sentinel from a genuine zero result.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{evaluate, Operator};
///
/// assert_eq!(evaluate(Some(5.0), Some(3.0), Some(Operator::Add)), 8.0);
/// assert_eq!(evaluate(Some(8.0), Some(0.0), Some(Operator::Divide)), 0.0);
/// assert_eq!(evaluate(None, Some(3.0), Some(Operator::Add)), 0.0);
/// ```
pub fn evaluate(lhs: Option<f64>, rhs: Option<f64>, operator: Option<Operator>) -> f64 {
    let (Some(lhs), Some(rhs), Some(operator)) = (lhs, rhs, operator) else {
        tracing::trace!(?lhs, ?rhs, ?operator, "absent input, returning sentinel");
        return SENTINEL;
    };

    let result = operator.apply(lhs, rhs);
    tracing::trace!(lhs, rhs, %operator, result, "evaluated");
    result
}

/// Evaluate with the operator given as raw keypad text.
///
/// Unrecognised symbols fall back to returning `rhs` unchanged. The
/// calculator only ever evaluates typed [`Operator`] values, so this
/// fallback is unreachable from [`Calculator`](crate::session::Calculator).
///
/// # Example
///
/// ```rust
/// use keycalc::core::evaluate_symbol;
///
/// assert_eq!(evaluate_symbol(Some(6.0), Some(2.0), Some("÷")), 3.0);
/// assert_eq!(evaluate_symbol(Some(6.0), Some(2.0), Some("^")), 2.0);
/// assert_eq!(evaluate_symbol(Some(6.0), Some(2.0), None), 0.0);
/// ```
pub fn evaluate_symbol(lhs: Option<f64>, rhs: Option<f64>, symbol: Option<&str>) -> f64 {
    let (Some(lhs), Some(rhs), Some(symbol)) = (lhs, rhs, symbol) else {
        return SENTINEL;
    };

    match Operator::from_symbol(symbol) {
        Some(operator) => evaluate(Some(lhs), Some(rhs), Some(operator)),
        None => {
            tracing::warn!(symbol, "unknown operator symbol, returning right operand");
            rhs
        }
    }
}
