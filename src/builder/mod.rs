//! Builder for constructing calculator sessions.

use crate::session::{Calculator, Observer, Snapshot};
use uuid::Uuid;

/// Builder for calculators with a fluent API.
///
/// # Example
///
/// ```
/// use keycalc::builder::CalculatorBuilder;
/// use uuid::Uuid;
///
/// let id = Uuid::new_v4();
/// let calc = CalculatorBuilder::new()
///     .session_id(id)
///     .observer(|snapshot| println!("{}", snapshot.display))
///     .build();
///
/// assert_eq!(calc.session_id(), id);
/// assert_eq!(calc.display(), "0");
/// ```
#[derive(Default)]
pub struct CalculatorBuilder {
    session_id: Option<Uuid>,
    observers: Vec<Observer>,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            session_id: None,
            observers: Vec::new(),
        }
    }

    /// Use a fixed session id instead of a random one.
    pub fn session_id(mut self, id: Uuid) -> Self {
        self.session_id = Some(id);
        self
    }

    /// Register an observer up front.
    pub fn observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the calculator in its cleared state.
    pub fn build(self) -> Calculator {
        let mut calc = Calculator::with_session_id(self.session_id.unwrap_or_else(Uuid::new_v4));
        for observer in self.observers {
            calc.subscribe_boxed(observer);
        }
        calc
    }
}
