//! The calculator state machine.

use crate::core::{
    evaluate, format_number, normalize, Digit, EntryMode, History, HistoryEntry, InputToken,
    Operator, TokenError,
};
use crate::session::snapshot::{Snapshot, SNAPSHOT_VERSION};
use chrono::Utc;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

/// Display text of a freshly cleared calculator.
pub const CLEARED_DISPLAY: &str = "0";

/// Callback invoked with a fresh snapshot after every handled token.
pub type Observer = Box<dyn Fn(&Snapshot) + Send + Sync>;

/// Handle returned by [`Calculator::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Calculator session that consumes keypad tokens one at a time.
///
/// All state is owned here and changes only through [`handle`](Self::handle).
/// Hosts read it back through the accessors or a [`Snapshot`].
///
/// # Example
///
/// ```rust
/// use keycalc::core::{InputToken, Operator};
/// use keycalc::session::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.handle(InputToken::digit(5).unwrap());
/// calc.handle(InputToken::Operator(Operator::Add));
/// calc.handle(InputToken::digit(3).unwrap());
/// calc.handle(InputToken::Operator(Operator::Add));
/// calc.handle(InputToken::digit(2).unwrap());
/// calc.handle(InputToken::Equals);
///
/// assert_eq!(calc.display(), "10");
/// assert_eq!(calc.history().latest().map(|e| e.text()), Some("5+3+2=10".to_string()));
/// ```
pub struct Calculator {
    session_id: Uuid,
    display: String,
    expression: String,
    mode: EntryMode,
    history: History,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Calculator {
    /// Create a calculator with a random session id.
    pub fn new() -> Self {
        Self::with_session_id(Uuid::new_v4())
    }

    /// Create a calculator for the given session.
    pub fn with_session_id(session_id: Uuid) -> Self {
        tracing::debug!(session = %session_id, "calculator session started");
        Self {
            session_id,
            display: CLEARED_DISPLAY.to_string(),
            expression: String::new(),
            mode: EntryMode::Idle,
            history: History::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Current number text (pure)
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Expression trace of the current computation (pure)
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Current entry mode (pure)
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// Completed calculations, oldest first (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Take an owned copy of the session state.
    ///
    /// The copy includes the full history, so its cost grows with the
    /// number of completed calculations.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            session_id: self.session_id,
            taken_at: Utc::now(),
            display: self.display.clone(),
            expression: self.expression.clone(),
            mode: self.mode,
            history: self.history.clone(),
        }
    }

    /// Register an observer that receives a snapshot after every token.
    ///
    /// While any observer is registered, every token pays for one
    /// [`snapshot`](Self::snapshot).
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.subscribe_boxed(Box::new(observer))
    }

    pub(crate) fn subscribe_boxed(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Consume one token and update the session.
    ///
    /// Never fails: degenerate input is absorbed as a no-op or a sentinel
    /// result.
    pub fn handle(&mut self, token: InputToken) {
        let from = self.mode;

        match token {
            InputToken::Clear => self.clear(),
            InputToken::Operator(operator) => self.apply_operator(operator),
            InputToken::Equals => self.equals(),
            InputToken::ToggleSign => self.toggle_sign(),
            InputToken::Percent => self.percent(),
            InputToken::Decimal => self.decimal_point(),
            InputToken::Digit(digit) => self.digit(digit),
        }

        tracing::debug!(
            session = %self.session_id,
            %token,
            from = from.name(),
            to = self.mode.name(),
            display = %self.display,
            expression = %self.expression,
            "handled token"
        );

        self.notify();
    }

    /// Parse a keypad label and handle it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::session::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// assert!(calc.press("7").is_ok());
    /// assert!(calc.press("+/-").is_ok());
    /// assert!(calc.press("^").is_err());
    /// assert_eq!(calc.display(), "-7");
    /// ```
    pub fn press(&mut self, label: &str) -> Result<(), TokenError> {
        let token = label.parse::<InputToken>()?;
        self.handle(token);
        Ok(())
    }

    /// Handle a whitespace-separated key sequence.
    ///
    /// The whole sequence is validated first; if any key is unknown, every
    /// bad key is reported and no token is handled. Returns the number of
    /// tokens handled.
    pub fn press_all(&mut self, keys: &str) -> Result<usize, NonEmptyVec<TokenError>> {
        match InputToken::parse_sequence(keys) {
            Validation::Success(tokens) => {
                let count = tokens.len();
                for token in tokens {
                    self.handle(token);
                }
                Ok(count)
            }
            Validation::Failure(errors) => {
                tracing::warn!(
                    session = %self.session_id,
                    errors = errors.len(),
                    "rejected key sequence"
                );
                Err(errors)
            }
        }
    }

    fn clear(&mut self) {
        self.display = CLEARED_DISPLAY.to_string();
        self.expression.clear();
        self.mode = EntryMode::Idle;
    }

    fn apply_operator(&mut self, operator: Operator) {
        let entered = normalize(&self.display);

        let value = match self.mode.pending() {
            None => {
                self.expression = format!("{}{}", self.display, operator);
                entered
            }
            Some((value, pending)) => {
                let result = evaluate(Some(value), entered, Some(pending));
                self.expression.push_str(&self.display);
                self.expression.push_str(operator.symbol());
                self.display = format_number(result);
                Some(result)
            }
        };

        self.mode = EntryMode::OperandPending {
            value,
            operator,
            typing: false,
        };
    }

    fn equals(&mut self) {
        let Some((value, operator)) = self.mode.pending() else {
            tracing::trace!(session = %self.session_id, "nothing pending, ignoring '='");
            return;
        };

        let result = format_number(evaluate(
            Some(value),
            normalize(&self.display),
            Some(operator),
        ));
        self.expression.push_str(&self.display);
        self.expression.push('=');

        let entry = HistoryEntry {
            expression: self.expression.clone(),
            result: result.clone(),
            completed_at: Utc::now(),
        };
        tracing::debug!(session = %self.session_id, entry = %entry, "calculation completed");
        self.history = std::mem::take(&mut self.history).append(entry);

        self.display = result;
        self.mode = EntryMode::DisplayReset;
    }

    fn toggle_sign(&mut self) {
        if self.display == CLEARED_DISPLAY {
            return;
        }
        self.display = match self.display.strip_prefix('-') {
            Some(unsigned) => unsigned.to_string(),
            None => format!("-{}", self.display),
        };
    }

    fn percent(&mut self) {
        if let Some(value) = normalize(&self.display) {
            self.display = format_number(value / 100.0);
        }
    }

    fn decimal_point(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn digit(&mut self, digit: Digit) {
        let c = digit.as_char();
        if self.display == CLEARED_DISPLAY || self.mode.should_reset() {
            self.display = c.to_string();
            self.mode = self.mode.after_digit();
        } else {
            self.display.push(c);
        }

        if self.mode.operator().is_none() {
            self.expression = self.display.clone();
        }
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in &self.observers {
            observer(&snapshot);
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("session_id", &self.session_id)
            .field("display", &self.display)
            .field("expression", &self.expression)
            .field("mode", &self.mode)
            .field("history", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
