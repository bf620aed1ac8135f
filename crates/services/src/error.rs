//! Shared error types for the services crate.

use thiserror::Error;

use course_core::model::ProgressError;
use storage::repository::StorageError;

/// Errors emitted by `ProgressTracker`.
///
/// Unknown weeks and lessons on reads are not errors; they read as "not completed".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ProgressError),
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] StorageError),
}
