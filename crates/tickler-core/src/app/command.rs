//! Command layer: a parsed CLI action dispatched to the tracker.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use super::tracker::Tracker;
use super::view::TaskView;
use crate::domain::{Result, TicklerError};
use crate::ports::{Clock, TaskStore};

/// Default priority for `add`.
pub const DEFAULT_PRIORITY: i64 = 3;

/// Default number of days for `postpone`.
pub const DEFAULT_POSTPONE_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    List,
    Add,
    #[default]
    Fetch,
    Postpone,
    Verbose,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::List,
        Action::Add,
        Action::Fetch,
        Action::Postpone,
        Action::Verbose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Add => "add",
            Action::Fetch => "fetch",
            Action::Postpone => "postpone",
            Action::Verbose => "verbose",
        }
    }

    /// `None` means the action was omitted and defaults to `fetch`.
    pub fn parse_or_default(name: Option<&str>) -> Result<Self> {
        name.map_or(Ok(Action::default()), str::parse)
    }
}

impl FromStr for Action {
    type Err = TicklerError;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TicklerError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the CLI hands the core for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub text: Option<String>,
    pub priority: i64,
    pub days: i64,
}

impl Command {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            text: None,
            priority: DEFAULT_PRIORITY,
            days: DEFAULT_POSTPONE_DAYS,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Listing(Vec<TaskView>),
    Task(TaskView),
    /// `fetch` on an empty store.
    Empty,
}

pub fn execute<S, C, R>(tracker: &Tracker<S, C>, command: &Command, rng: &mut R) -> Result<Outcome>
where
    S: TaskStore,
    C: Clock,
    R: Rng + ?Sized,
{
    debug!(action = %command.action, "executing");
    let text = command.text.as_deref();
    match command.action {
        Action::List => tracker.list().map(Outcome::Listing),
        Action::Verbose => tracker.verbose().map(Outcome::Listing),
        Action::Add => tracker.add(text, command.priority).map(Outcome::Task),
        Action::Postpone => tracker.postpone(text, command.days).map(Outcome::Task),
        Action::Fetch => Ok(tracker.fetch(rng)?.map_or(Outcome::Empty, Outcome::Task)),
    }
}
