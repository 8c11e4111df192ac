//! Domain identifiers.
//!
//! Task ids are plain positive integers. They are the keys of the store file,
//! so they have to stay small and human-typeable (`tickler postpone 3`).
//!
//! ## Allocation
//! The next id is always `max(existing) + 1`. Gaps are left alone and ids are
//! never reused, even after hand-editing the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a Task (the key of the store mapping).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// The id handed out by an empty store.
    pub const FIRST: TaskId = TaskId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Next id after the largest one in `existing`.
    ///
    /// Returns [`TaskId::FIRST`] when `existing` is empty.
    pub fn next_after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = TaskId>,
    {
        existing
            .into_iter()
            .max()
            .map(|max| TaskId(max.0 + 1))
            .unwrap_or(Self::FIRST)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_store_starts_at_one() {
        assert_eq!(TaskId::next_after(Vec::new()), TaskId::FIRST);
        assert_eq!(TaskId::FIRST.get(), 1);
    }

    #[rstest]
    #[case::contiguous(vec![1, 2, 3], 4)]
    #[case::gaps(vec![2, 7, 4], 8)]
    #[case::single_high(vec![7], 8)]
    fn next_id_follows_max(#[case] existing: Vec<u64>, #[case] expected: u64) {
        let next = TaskId::next_after(existing.into_iter().map(TaskId::new));
        assert_eq!(next, TaskId::new(expected));
    }

    #[test]
    fn ids_serialize_as_json_object_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(TaskId::new(12), "x");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"12":"x"}"#);

        let back: std::collections::BTreeMap<TaskId, String> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&TaskId::new(12)).map(String::as_str), Some("x"));
    }
}
