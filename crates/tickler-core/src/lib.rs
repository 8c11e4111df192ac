//! tickler-core
//!
//! Core of a personal task tracker: tasks with a priority and a timestamp,
//! kept in a local file, fetched at random weighted by how urgent they have
//! become.
//!
//! # Modules
//! - **domain**: ids, priorities, task records, errors
//! - **ports**: `Clock` and `TaskStore` traits
//! - **impls**: JSON file store, in-memory store
//! - **app**: valuation, weighted selection, lookup, tracker, command dispatch
//! - **config**: store path and defaults

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{Action, Command, Outcome, TaskView, Tracker, execute};
pub use config::Config;
pub use domain::{Priority, Task, TaskId, TaskMap, TicklerError};
