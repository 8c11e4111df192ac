//! Ports - abstraction layer
//!
//! Traits for the two things the core reaches outside itself for: the current
//! time and the persisted task mapping. Implementations live in `impls`.

pub mod clock;
pub mod task_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::task_store::TaskStore;
