//! Recent searches - most recent first, unique by name, bounded

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of cities kept in the history
pub const HISTORY_CAP: usize = 5;

/// Ordered list of successfully resolved city names.
///
/// The only way in is [`SearchHistory::push`]; there is no removal other than
/// the dedup and truncation it performs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SearchHistory(Vec<String>);

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `name` to the front, dropping any older occurrence, then cap.
    pub fn push(&mut self, name: &str) {
        self.0.retain(|existing| existing != name);
        self.0.insert(0, name.to_string());
        self.0.truncate(HISTORY_CAP);
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn front(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for SearchHistory {
    /// Builds a history as if each name had been pushed in order.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = SearchHistory::new();
        for name in iter {
            history.push(name.as_ref());
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_moves_to_front() {
        let mut history = SearchHistory::new();
        history.push("Paris");
        history.push("Tokyo");

        assert_eq!(history.as_slice(), ["Tokyo", "Paris"]);
    }

    #[test]
    fn test_push_dedups_and_truncates() {
        let history: SearchHistory = ["Paris", "Tokyo", "Paris", "Rome", "Berlin", "Madrid"]
            .into_iter()
            .collect();

        assert_eq!(
            history.as_slice(),
            ["Madrid", "Berlin", "Rome", "Paris", "Tokyo"]
        );
    }

    #[test]
    fn test_push_front_is_idempotent() {
        let mut history: SearchHistory = ["Oslo", "Lima", "Cairo"].into_iter().collect();
        let before = history.clone();

        history.push("Cairo");
        history.push("Cairo");

        assert_eq!(history, before);
        assert_eq!(history.front(), Some("Cairo"));
    }

    #[test]
    fn test_cap_drops_oldest() {
        let history: SearchHistory = ["a", "b", "c", "d", "e", "f", "g"].into_iter().collect();

        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history.front(), Some("g"));
        assert!(!history.iter().any(|name| name == "a" || name == "b"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let history: SearchHistory = ["paris", "Paris"].into_iter().collect();
        assert_eq!(history.len(), 2);
    }
}
