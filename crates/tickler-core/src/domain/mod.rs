//! Domain model (ids, priorities, task records, errors).

pub mod errors;
pub mod ids;
pub mod priority;
pub mod task;

pub use self::errors::{Result, TicklerError};
pub use self::ids::TaskId;
pub use self::priority::Priority;
pub use self::task::{SECONDS_PER_DAY, Task, TaskMap};
