//! Application services for the Hilldale breakfast planner
//!
//! Everything a front end needs around the `shared` domain model: the
//! persisted envelope and its store abstraction, the retention policy that
//! clears stale days, the share-message formatter and the share-sink
//! helpers. The only fallible boundaries are the store and the share sink;
//! both report failure through return values, never panics.

pub mod cleanup;
pub mod dates;
pub mod error;
pub mod message;
pub mod share;
pub mod storage;

// Re-exports
pub use error::StoreError;
pub use storage::{DayStore, JsonFileStore, MemoryStore, Store};
