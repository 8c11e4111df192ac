//! What the CLI renders for one task.

use crate::domain::{Priority, Task, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,

    /// ANSI SGR foreground code for the priority.
    pub color: u8,

    /// Current value, only for views that show it (`verbose`, `fetch`).
    pub value: Option<f64>,
}

impl TaskView {
    pub fn new(id: TaskId, task: &Task) -> Self {
        Self {
            id,
            text: task.text.clone(),
            priority: task.priority,
            color: task.priority.color_code(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}
