//! Application logic
//!
//! - valuation: value and display order of a task
//! - selector: weighted random choice
//! - lookup: postpone target resolution
//! - tracker: list / verbose / add / fetch / postpone over a store
//! - command: action parsing and dispatch

pub mod command;
pub mod lookup;
pub mod selector;
pub mod tracker;
pub mod valuation;
pub mod view;

pub use self::command::{Action, Command, Outcome, execute};
pub use self::lookup::Target;
pub use self::tracker::Tracker;
pub use self::view::TaskView;
