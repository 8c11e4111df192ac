//! Valuation: how urgent a task is right now.
//!
//! ```text
//! value = priority * rate(priority) ^ (age_seconds / 604800)
//! rate(p) = (5p)^(1/7)
//! ```
//!
//! Every level's rate is above 1, so value grows with age, and faster for
//! higher priorities. Old high-priority tasks dominate `fetch`.
//!
//! # Display order vs. value
//! `list` and `verbose` do NOT order by value. They order by the raw
//! `(priority, age)` key, highest first. A year-old priority-1 task can have a
//! larger value than a fresh priority-5 task and still be listed below it.
//!
//! # Negative age
//! A task postponed past "now" (or a clock that jumped backwards) has a
//! negative raw age. It is clamped to zero for both value and sort key.

use std::cmp::{Ordering, Reverse};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::trace;

use crate::domain::{Priority, Task, TaskId};

/// Seconds in one week, the unit of the value exponent.
pub const SECONDS_PER_WEEK: f64 = 604_800.0;

/// Time since `task.time`, never negative.
pub fn age(task: &Task, now: DateTime<Utc>) -> TimeDelta {
    let raw = now - task.time;
    if raw < TimeDelta::zero() {
        trace!(time = %task.time, %now, "task lies in the future, age clamped to zero");
        TimeDelta::zero()
    } else {
        raw
    }
}

fn age_seconds(task: &Task, now: DateTime<Utc>) -> f64 {
    let age = age(task, now);
    // Whole seconds plus the sub-second remainder, without going through
    // nanosecond totals that overflow after ~292 years.
    age.num_seconds() as f64 + f64::from(age.subsec_nanos()) / 1e9
}

/// Urgency score used as the fetch weight.
pub fn value(task: &Task, now: DateTime<Utc>) -> f64 {
    value_at(task.priority, age_seconds(task, now))
}

/// Value for a priority at a given age in seconds. Negative ages count as 0.
pub fn value_at(priority: Priority, age_seconds: f64) -> f64 {
    let weeks = age_seconds.max(0.0) / SECONDS_PER_WEEK;
    f64::from(priority.level()) * priority.growth_rate().powf(weeks)
}

/// Display ordering key: priority first, then age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub priority: Priority,
    pub age: TimeDelta,
}

pub fn sort_key(task: &Task, now: DateTime<Utc>) -> SortKey {
    SortKey {
        priority: task.priority,
        age: age(task, now),
    }
}

/// Order entries for display: `(priority, age)` descending, ties by id.
pub fn sort_for_display(entries: &mut [(TaskId, &Task)], now: DateTime<Utc>) {
    entries.sort_by(|(a_id, a), (b_id, b)| compare_for_display((*a_id, *a), (*b_id, *b), now));
}

fn compare_for_display(
    (a_id, a): (TaskId, &Task),
    (b_id, b): (TaskId, &Task),
    now: DateTime<Utc>,
) -> Ordering {
    Reverse(sort_key(a, now))
        .cmp(&Reverse(sort_key(b, now)))
        .then(a_id.cmp(&b_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn task_aged(priority: i64, age: TimeDelta) -> Task {
        Task::new("t", Priority::new(priority).unwrap(), now() - age)
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    fn fresh_task_is_worth_its_priority(#[case] p: i64) {
        let task = task_aged(p, TimeDelta::zero());
        assert_eq!(value(&task, now()), p as f64);
    }

    #[test]
    fn value_strictly_increases_with_age() {
        for p in Priority::all() {
            let mut last = value_at(p, 0.0);
            for secs in [1.0, 3600.0, 86_400.0, SECONDS_PER_WEEK, 10.0 * SECONDS_PER_WEEK] {
                let v = value_at(p, secs);
                assert!(v > last, "priority {p}: {v} <= {last} at {secs}s");
                last = v;
            }
        }
    }

    #[test]
    fn one_week_multiplies_by_rate() {
        let p = Priority::new(4).unwrap();
        let v = value_at(p, SECONDS_PER_WEEK);
        assert!((v - 4.0 * p.growth_rate()).abs() < 1e-12);
    }

    #[test]
    fn higher_priority_is_worth_more_at_same_age() {
        let age = 3.0 * SECONDS_PER_WEEK;
        let values: Vec<f64> = Priority::all().map(|p| value_at(p, age)).collect();
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn future_task_is_clamped_to_zero_age() {
        let task = task_aged(3, TimeDelta::days(-10));
        assert_eq!(age(&task, now()), TimeDelta::zero());
        assert_eq!(value(&task, now()), 3.0);
    }

    #[test]
    fn display_order_ignores_value() {
        let old_low = task_aged(1, TimeDelta::days(3650));
        let fresh_high = task_aged(5, TimeDelta::zero());
        assert!(value(&old_low, now()) > value(&fresh_high, now()));

        let mut entries = vec![(TaskId::new(1), &old_low), (TaskId::new(2), &fresh_high)];
        sort_for_display(&mut entries, now());

        let ids: Vec<u64> = entries.iter().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn same_priority_lists_older_first() {
        let young = task_aged(3, TimeDelta::hours(1));
        let old = task_aged(3, TimeDelta::days(5));
        let low = task_aged(2, TimeDelta::days(50));

        let mut entries = vec![
            (TaskId::new(1), &young),
            (TaskId::new(2), &low),
            (TaskId::new(3), &old),
        ];
        sort_for_display(&mut entries, now());

        let ids: Vec<u64> = entries.iter().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn full_ties_fall_back_to_id() {
        let a = task_aged(3, TimeDelta::days(1));
        let b = a.clone();
        let mut entries = vec![(TaskId::new(9), &a), (TaskId::new(4), &b)];
        sort_for_display(&mut entries, now());
        assert_eq!(entries[0].0, TaskId::new(4));
    }
}
