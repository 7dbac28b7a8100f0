//! Keycalc: a left-to-right pocket calculator core
//!
//! Keycalc turns a stream of keypad tokens into a display value, an
//! expression trace and a history of completed calculations. It follows a
//! "pure core, stateful shell" layout: arithmetic, formatting and history
//! are pure values, while a single [`Calculator`] owns the session and
//! applies one token at a time.
//!
//! # Core Concepts
//!
//! - **Tokens**: digits, `.`, `+ - × ÷`, `=`, `C`, `+/-` and `%`
//! - **Entry mode**: explicit tagged state for pending operators
//! - **History**: append-only log of `"<expr>=<result>"` entries
//! - **Snapshots**: immutable copies of the session for renderers
//!
//! Operators fold strictly left to right; there is no precedence.
//!
//! # Example
//!
//! ```rust
//! use keycalc::{Calculator, InputToken, Operator};
//!
//! let mut calc = Calculator::new();
//! for token in [
//!     InputToken::digit(4).unwrap(),
//!     InputToken::Operator(Operator::Multiply),
//!     InputToken::digit(2).unwrap(),
//!     InputToken::Decimal,
//!     InputToken::digit(5).unwrap(),
//!     InputToken::Equals,
//! ] {
//!     calc.handle(token);
//! }
//!
//! assert_eq!(calc.display(), "10");
//! assert_eq!(calc.history().texts(), vec!["4×2.5=10"]);
//! ```

pub mod builder;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use builder::CalculatorBuilder;
pub use core::{Digit, EntryMode, History, HistoryEntry, InputToken, Operator, TokenError};
pub use session::{Calculator, Snapshot, SnapshotError};
