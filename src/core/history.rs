//! Calculation history.
//!
//! Provides an append-only log of completed calculations. Entries are
//! immutable values; recording returns a new history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single completed calculation.
///
/// # Example
///
/// ```rust
/// use keycalc::core::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     expression: "12+7=".to_string(),
///     result: "19".to_string(),
///     completed_at: Utc::now(),
/// };
///
/// assert_eq!(entry.text(), "12+7=19");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression trace, ending in `=`
    pub expression: String,
    /// The formatted result
    pub result: String,
    /// When `=` was pressed
    pub completed_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// The entry as shown to the user, `<expression><result>`.
    pub fn text(&self) -> String {
        format!("{}{}", self.expression, self.result)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.expression, self.result)
    }
}

/// Chronological history of completed calculations.
///
/// History is immutable - the `record` method returns a new history
/// with the entry added. Storage order is completion order; use
/// [`most_recent_first`](History::most_recent_first) when rendering.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{History, HistoryEntry};
/// use chrono::Utc;
///
/// let history = History::new();
///
/// let history = history.record(HistoryEntry {
///     expression: "1+1=".to_string(),
///     result: "2".to_string(),
///     completed_at: Utc::now(),
/// });
/// let history = history.record(HistoryEntry {
///     expression: "2×3=".to_string(),
///     result: "6".to_string(),
///     completed_at: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.entries()[0].text(), "1+1=2");
/// assert_eq!(history.latest().map(|e| e.text()), Some("2×3=6".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// This does not mutate the existing history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::core::{History, HistoryEntry};
    /// use chrono::Utc;
    ///
    /// let history = History::new();
    /// let new_history = history.record(HistoryEntry {
    ///     expression: "9÷3=".to_string(),
    ///     result: "3".to_string(),
    ///     completed_at: Utc::now(),
    /// });
    ///
    /// assert_eq!(new_history.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Append an entry, consuming this history.
    ///
    /// Same result as [`record`](Self::record) without copying the
    /// existing entries.
    pub fn append(mut self, entry: HistoryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// All entries in completion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries newest first, for rendering.
    pub fn most_recent_first(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter().rev()
    }

    /// The most recently completed calculation.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Rendered texts in completion order.
    pub fn texts(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::text).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(expression: &str, result: &str) -> HistoryEntry {
        HistoryEntry {
            expression: expression.to_string(),
            result: result.to_string(),
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.latest().is_none());
        assert_eq!(history.most_recent_first().count(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new();
        let new_history = history.record(entry("5+3=", "8"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn append_matches_record() {
        let first = entry("1+1=", "2");
        let second = entry("2+2=", "4");

        let recorded = History::new().record(first.clone()).record(second.clone());
        let appended = History::new().append(first).append(second);

        assert_eq!(recorded, appended);
    }

    #[test]
    fn entries_keep_completion_order() {
        let history = History::new()
            .record(entry("1+1=", "2"))
            .record(entry("2+2=", "4"))
            .record(entry("3+3=", "6"));

        assert_eq!(history.texts(), vec!["1+1=2", "2+2=4", "3+3=6"]);
    }

    #[test]
    fn most_recent_first_reverses_without_reordering_storage() {
        let history = History::new()
            .record(entry("1+1=", "2"))
            .record(entry("2+2=", "4"));

        let recent: Vec<String> = history.most_recent_first().map(|e| e.text()).collect();
        assert_eq!(recent, vec!["2+2=4", "1+1=2"]);
        assert_eq!(history.entries()[0].text(), "1+1=2");
    }

    #[test]
    fn display_matches_text() {
        let e = entry("8÷0=", "0");
        assert_eq!(e.to_string(), e.text());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::new().record(entry("4×2.5=", "10"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
