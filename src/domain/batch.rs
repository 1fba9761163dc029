//! Result of a best-effort batch fetch.

use super::foundation::ApiError;

/// An id whose fetch failed, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped<K> {
    pub id: K,
    pub reason: ApiError,
}

/// Successes and failures of a batch fetch.
///
/// `fetched` keeps the relative input order of the ids that succeeded.
/// A failed id appears only in `skipped`, so `fetched.len()` may be smaller
/// than the number of ids requested.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome<T, K> {
    pub fetched: Vec<T>,
    pub skipped: Vec<Skipped<K>>,
}

impl<T, K> BatchOutcome<T, K> {
    pub fn new() -> Self {
        Self {
            fetched: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn push_fetched(&mut self, item: T) {
        self.fetched.push(item);
    }

    pub fn push_skipped(&mut self, id: K, reason: ApiError) {
        self.skipped.push(Skipped { id, reason });
    }

    /// Number of ids the batch was asked for.
    pub fn requested(&self) -> usize {
        self.fetched.len() + self.skipped.len()
    }

    /// True if no id was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Drops the failure record, keeping only what was fetched.
    pub fn into_fetched(self) -> Vec<T> {
        self.fetched
    }
}

impl<T, K> Default for BatchOutcome<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
