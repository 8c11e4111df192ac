//! Task record and the id -> task mapping persisted by the store.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::errors::TicklerError;
use super::ids::TaskId;
use super::priority::Priority;

/// Seconds added to `time` per postponed day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// The full store contents. Iteration order carries no meaning.
pub type TaskMap = BTreeMap<TaskId, Task>;

/// A single todo item.
///
/// The id is not part of the record: it is the key under which the record is
/// stored in [`TaskMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub priority: Priority,

    /// Creation time, or the time the task was last postponed to.
    pub time: DateTime<Utc>,
}

impl Task {
    pub fn new(text: impl Into<String>, priority: Priority, time: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            priority,
            time,
        }
    }

    /// Shift `time` forward by `days` whole days (backwards if negative).
    ///
    /// Only the timestamp changes.
    pub fn postpone(&mut self, days: i64) -> Result<(), TicklerError> {
        let shift = days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(TimeDelta::try_seconds)
            .ok_or(TicklerError::TimestampOverflow)?;
        self.time = self
            .time
            .checked_add_signed(shift)
            .ok_or(TicklerError::TimestampOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Task {
        let t = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        Task::new("write report", Priority::default(), t)
    }

    #[test]
    fn postpone_shifts_only_the_timestamp() {
        let before = sample();
        let mut after = before.clone();
        after.postpone(7).unwrap();

        assert_eq!((after.time - before.time).num_seconds(), 604_800);
        assert_eq!(after.text, before.text);
        assert_eq!(after.priority, before.priority);
    }

    #[test]
    fn negative_postpone_moves_backwards() {
        let before = sample();
        let mut after = before.clone();
        after.postpone(-2).unwrap();
        assert_eq!((before.time - after.time).num_seconds(), 2 * SECONDS_PER_DAY);
    }

    #[test]
    fn absurd_postpone_overflows_cleanly() {
        let mut task = sample();
        assert!(matches!(
            task.postpone(i64::MAX),
            Err(TicklerError::TimestampOverflow)
        ));
        assert_eq!(task, sample());
    }
}
