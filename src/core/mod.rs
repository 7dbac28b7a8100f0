//! Pure calculator core.
//!
//! This module contains the side-effect free pieces of the calculator:
//! - Operators and the binary evaluator
//! - Display text normalization and number formatting
//! - Input tokens and the tagged entry mode
//! - Immutable calculation history
//!
//! Nothing here owns session state; [`crate::session`] drives these
//! pieces one token at a time.

mod evaluate;
mod history;
mod mode;
mod number;
mod operator;
mod token;

pub use evaluate::{evaluate, evaluate_symbol, SENTINEL};
pub use history::{History, HistoryEntry};
pub use mode::EntryMode;
pub use number::{format_number, normalize};
pub use operator::Operator;
pub use token::{Digit, InputToken, TokenError};
