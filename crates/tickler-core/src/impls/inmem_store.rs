//! InMemoryTaskStore - store for tests and dry runs
//!
//! Counts saves so callers can check that rejected commands never wrote.

use std::sync::Mutex;

use crate::domain::{Result, TaskMap};
use crate::ports::TaskStore;

#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    tasks: TaskMap,
    saves: usize,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing mapping.
    pub fn with_tasks(tasks: TaskMap) -> Self {
        Self {
            state: Mutex::new(State { tasks, saves: 0 }),
        }
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> TaskMap {
        self.lock().tasks.clone()
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TaskStore for InMemoryTaskStore {
    fn load(&self) -> Result<TaskMap> {
        Ok(self.lock().tasks.clone())
    }

    fn save(&self, tasks: &TaskMap) -> Result<()> {
        let mut state = self.lock();
        state.tasks = tasks.clone();
        state.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, Task, TaskId};
    use chrono::Utc;

    #[test]
    fn save_replaces_contents_and_counts() {
        let store = InMemoryTaskStore::new();
        assert!(store.load().unwrap().is_empty());

        let mut tasks = TaskMap::new();
        tasks.insert(TaskId::FIRST, Task::new("a", Priority::LOWEST, Utc::now()));
        store.save(&tasks).unwrap();

        assert_eq!(store.snapshot(), tasks);
        assert_eq!(store.save_count(), 1);
    }
}
