//! Impls - implementations of the ports
//!
//! - **JsonFileStore**: the store file used by the CLI
//! - **InMemoryTaskStore**: tests

pub mod inmem_store;
pub mod json_store;

pub use self::inmem_store::InMemoryTaskStore;
pub use self::json_store::JsonFileStore;
