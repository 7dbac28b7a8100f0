//! Binary arithmetic operators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four keypad operators.
///
/// Operators carry no precedence: the calculator folds them strictly
/// left to right, one pending operator at a time.
///
/// # Example
///
/// ```rust
/// use keycalc::core::Operator;
///
/// assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
/// assert_eq!(Operator::Divide.symbol(), "÷");
/// assert_eq!(Operator::Subtract.apply(7.0, 2.0), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The keypad symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Look up an operator by its exact keypad symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero yields `0` rather than an infinity.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs / rhs
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
