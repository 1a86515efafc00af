//! Shared domain types for the Hilldale breakfast planner
//!
//! Pure data model and derivation rules: rooms, guests, per-day orders and
//! the kitchen summary computed from them. No I/O lives here — persistence
//! and rendering are the `planner` crate's concern.

pub mod error;
pub mod models;
pub mod summary;

// Re-exports
pub use error::DomainError;
pub use models::{
    BreakfastType, DayData, Guest, GuestType, Room, RoomData, DEFAULT_BREAKFAST_TIME, MAX_GUESTS,
};
pub use summary::{calculate_fruit_platters, generate_breakfast_summary, BreakfastSummary, FruitPlatters};
