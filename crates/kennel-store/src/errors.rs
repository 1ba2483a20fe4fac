//! Error handling for kennel-store
//!
//! Wraps kennel-core KennelError with store-specific helpers

use kennel_core::errors::KennelError;

/// Result type alias using KennelError
pub type Result<T> = kennel_core::errors::Result<T>;

/// Create a persistence error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> KennelError {
    KennelError::Persistence {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a missing-id contract error
pub fn missing_id() -> KennelError {
    KennelError::MissingId
}
