//! Storage error types.
//!
//! Used by store implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using the identity store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
