//! Keypad input tokens.
//!
//! A token is one discrete user action. Hosts either construct
//! [`InputToken`] values directly or parse the keypad labels.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Errors produced while reading keypad labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unknown key '{label}'")]
    Unknown { label: String },

    #[error("Unknown key '{label}' at position {position}")]
    UnknownAt { label: String, position: usize },

    #[error("Digit {value} is out of range 0-9")]
    DigitOutOfRange { value: u8 },
}

/// A single decimal digit, `0` through `9`.
///
/// The payload is checked on construction and on deserialization, so a
/// digit always renders as one keypad label.
///
/// # Example
///
/// ```rust
/// use keycalc::core::Digit;
///
/// let seven = Digit::new(7).unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::new(10).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Build a digit, rejecting values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = TokenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(TokenError::DigitOutOfRange { value })
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One unit of calculator input.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{InputToken, Operator};
///
/// let token: InputToken = "÷".parse().unwrap();
/// assert_eq!(token, InputToken::Operator(Operator::Divide));
/// assert_eq!(InputToken::ToggleSign.to_string(), "+/-");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputToken {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

impl InputToken {
    /// Build a digit token, rejecting values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// The keypad label for this token.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Parse a whitespace-separated key sequence.
    ///
    /// Every unknown key is reported, not just the first one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::core::InputToken;
    /// use stillwater::validation::Validation;
    ///
    /// match InputToken::parse_sequence("5 + 3 =") {
    ///     Validation::Success(tokens) => assert_eq!(tokens.len(), 4),
    ///     Validation::Failure(_) => panic!("valid keys"),
    /// }
    ///
    /// match InputToken::parse_sequence("5 ^ 3 ?") {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    ///     Validation::Success(_) => panic!("invalid keys"),
    /// }
    /// ```
    pub fn parse_sequence(input: &str) -> Validation<Vec<InputToken>, NonEmptyVec<TokenError>> {
        let parsed: Vec<Validation<InputToken, NonEmptyVec<TokenError>>> = input
            .split_whitespace()
            .enumerate()
            .map(|(position, label)| match label.parse::<InputToken>() {
                Ok(token) => Validation::success(token),
                Err(_) => Validation::fail(TokenError::UnknownAt {
                    label: label.to_string(),
                    position,
                }),
            })
            .collect();

        Validation::all_vec(parsed)
    }
}

impl FromStr for InputToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "." => Self::Decimal,
            "=" => Self::Equals,
            "C" => Self::Clear,
            "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            _ => {
                if let Some(op) = Operator::from_symbol(s) {
                    Self::Operator(op)
                } else {
                    let mut chars = s.chars();
                    let digit = chars
                        .next()
                        .and_then(|c| c.to_digit(10))
                        .and_then(|d| u8::try_from(d).ok())
                        .and_then(Digit::new);
                    match (digit, chars.next()) {
                        (Some(d), None) => Self::Digit(d),
                        _ => {
                            return Err(TokenError::Unknown {
                                label: s.to_string(),
                            })
                        }
                    }
                }
            }
        };
        Ok(token)
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<Operator> for InputToken {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
