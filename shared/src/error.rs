//! Domain error types
//!
//! The domain layer is total almost everywhere: derivations and count updates
//! cannot fail because every mutation recomputes the dependent fields
//! together. The only fallible operation is breakfast-time entry, which
//! validates the "HH:MM" format.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Breakfast time was not a valid "HH:MM" clock time
    #[error("invalid breakfast time {0:?}, expected HH:MM")]
    InvalidTime(String),
}
