//! Entry mode of the calculator.
//!
//! The mode records what the next keystroke means: whether an operator is
//! waiting for its right operand, and whether the next digit starts a fresh
//! number. Operand and operator live in the same variant, so they can never
//! drift apart.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Tagged entry state.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{EntryMode, Operator};
///
/// let mode = EntryMode::OperandPending {
///     value: Some(12.0),
///     operator: Operator::Add,
///     typing: false,
/// };
///
/// assert_eq!(mode.pending(), Some((12.0, Operator::Add)));
/// assert!(mode.should_reset());
/// assert!(!EntryMode::Idle.should_reset());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum EntryMode {
    /// Free-standing number entry with nothing pending.
    #[default]
    Idle,

    /// An operator is waiting for its right operand.
    ///
    /// `value` is the captured left operand, `None` when the display could
    /// not be read as a number. While `typing` is false the next digit
    /// replaces the display.
    OperandPending {
        #[serde(with = "operand")]
        value: Option<f64>,
        operator: Operator,
        typing: bool,
    },

    /// A result is on display and the next digit starts a fresh number.
    DisplayReset,
}

impl EntryMode {
    /// Name of the variant, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::OperandPending { typing: false, .. } => "OperandPending",
            Self::OperandPending { typing: true, .. } => "OperandTyping",
            Self::DisplayReset => "DisplayReset",
        }
    }

    /// Left operand and operator, when both are present.
    pub fn pending(&self) -> Option<(f64, Operator)> {
        match *self {
            Self::OperandPending {
                value: Some(value),
                operator,
                ..
            } => Some((value, operator)),
            _ => None,
        }
    }

    /// The pending operator, even if its operand could not be captured.
    pub fn operator(&self) -> Option<Operator> {
        match *self {
            Self::OperandPending { operator, .. } => Some(operator),
            _ => None,
        }
    }

    /// Whether the next digit must start a fresh number.
    pub fn should_reset(&self) -> bool {
        matches!(
            self,
            Self::DisplayReset | Self::OperandPending { typing: false, .. }
        )
    }

    /// Mode after a digit has been entered.
    pub fn after_digit(self) -> Self {
        match self {
            Self::DisplayReset => Self::Idle,
            Self::OperandPending {
                value, operator, ..
            } => Self::OperandPending {
                value,
                operator,
                typing: true,
            },
            Self::Idle => Self::Idle,
        }
    }
}

/// Serde glue for the captured operand.
///
/// An overflowed operand is infinite, and JSON has no literal for that:
/// `serde_json` would write `null` and read it back as `None`. Text formats
/// carry non-finite values as `"inf"`, `"-inf"` or `"NaN"` instead. Binary
/// formats keep the plain `Option<f64>`.
mod operand {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) if !v.is_finite() && serializer.is_human_readable() => {
                serializer.serialize_some(&v.to_string())
            }
            _ => value.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        if !deserializer.is_human_readable() {
            return Option::<f64>::deserialize(deserializer);
        }
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(v)) => Ok(Some(v)),
            Some(Repr::Text(text)) => text
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid operand '{text}'"))),
        }
    }
}
