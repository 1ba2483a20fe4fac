use thiserror::Error;

/// Result type alias using KennelError
pub type Result<T> = std::result::Result<T, KennelError>;

/// Error taxonomy for kennel operations
///
/// The taxonomy is deliberately small. Every statement failure inside the
/// store surfaces as `Persistence` with the originating operation attached;
/// the only domain-side failure is updating a record that was never saved.
/// A lookup matching zero rows is `None`, not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KennelError {
    /// A statement failed inside the store (malformed SQL, constraint
    /// violation, database locked or unavailable)
    #[error("persistence failure in operation '{op}': {message}")]
    Persistence { op: String, message: String },

    /// update() was called on a record whose id was never assigned
    #[error("record has no id: save it before calling update")]
    MissingId,
}

impl KennelError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            KennelError::Persistence { .. } => "ERR_PERSISTENCE",
            KennelError::MissingId => "ERR_MISSING_ID",
        }
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        match self {
            KennelError::Persistence { op, .. } => Some(op),
            KennelError::MissingId => None,
        }
    }
}
