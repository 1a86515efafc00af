//! Store error types

use thiserror::Error;

/// Failure inside a [`Store`](crate::storage::Store) implementation.
///
/// These never cross into the domain layer: `DayStore` converts read
/// failures into empty-day semantics and write failures into a `false`
/// outcome, logging the cause.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
