//! Tracker: the five user-facing operations over a store and a clock.
//!
//! Every call loads the whole store. Mutating calls (`add`, `postpone`)
//! validate first and save once at the end, so a rejected command never
//! writes.

use rand::Rng;
use tracing::{debug, info};

use super::lookup;
use super::selector;
use super::valuation;
use super::view::TaskView;
use crate::domain::{Priority, Result, Task, TaskId, TicklerError};
use crate::ports::{Clock, TaskStore};

pub struct Tracker<S, C> {
    store: S,
    clock: C,
}

impl<S: TaskStore, C: Clock> Tracker<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All tasks in display order, without values.
    pub fn list(&self) -> Result<Vec<TaskView>> {
        self.listing(false)
    }

    /// Same order as [`Tracker::list`], each with its current value.
    pub fn verbose(&self) -> Result<Vec<TaskView>> {
        self.listing(true)
    }

    fn listing(&self, with_value: bool) -> Result<Vec<TaskView>> {
        let tasks = self.store.load()?;
        let now = self.clock.now();

        let mut entries: Vec<(TaskId, &Task)> = tasks.iter().map(|(id, t)| (*id, t)).collect();
        valuation::sort_for_display(&mut entries, now);

        Ok(entries
            .into_iter()
            .map(|(id, task)| {
                let view = TaskView::new(id, task);
                if with_value {
                    view.with_value(valuation::value(task, now))
                } else {
                    view
                }
            })
            .collect())
    }

    /// Create a task stamped with the current time.
    pub fn add(&self, text: Option<&str>, priority: i64) -> Result<TaskView> {
        let text = text
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(TicklerError::MissingText)?;
        let priority = Priority::new(priority)?;

        let mut tasks = self.store.load()?;
        let id = TaskId::next_after(tasks.keys().copied());
        let task = Task::new(text, priority, self.clock.now());
        let view = TaskView::new(id, &task);
        tasks.insert(id, task);
        self.store.save(&tasks)?;

        info!(%id, %priority, "task added");
        Ok(view)
    }

    /// Weighted random pick by value. `None` when the store is empty.
    pub fn fetch<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<TaskView>> {
        let tasks = self.store.load()?;
        let now = self.clock.now();

        let (ids, weights): (Vec<TaskId>, Vec<f64>) = tasks
            .iter()
            .map(|(id, task)| (*id, valuation::value(task, now)))
            .unzip();

        let Some(&id) = selector::choose(&weights, &ids, rng) else {
            debug!(count = tasks.len(), "nothing to fetch");
            return Ok(None);
        };
        debug!(%id, "fetched");

        Ok(tasks
            .get(&id)
            .map(|task| TaskView::new(id, task).with_value(valuation::value(task, now))))
    }

    /// Push a task's timestamp forward by `days` whole days.
    pub fn postpone(&self, target: Option<&str>, days: i64) -> Result<TaskView> {
        let mut tasks = self.store.load()?;
        let id = lookup::resolve(&tasks, target)?;
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| TicklerError::TaskNotFound(id.to_string()))?;
        task.postpone(days)?;
        let view = TaskView::new(id, task);
        self.store.save(&tasks)?;

        info!(%id, days, "task postponed");
        Ok(view)
    }
}
