//! Error types for revision validation.
//!
//! Each variant provides a descriptive message identifying the invalid input
//! and the constraint that was violated.

use thiserror::Error;

/// Errors arising from invalid artefact-related values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtefactError {
    /// A revision string is empty or contains characters that cannot be
    /// placed in a URL path segment.
    #[error("invalid revision \"{value}\": {reason}")]
    InvalidRevision {
        /// The rejected revision string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },
}

/// Result type alias using [`ArtefactError`].
pub type Result<T> = std::result::Result<T, ArtefactError>;
