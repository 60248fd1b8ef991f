//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (malformed input, missing entity, rule violation)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A storage read or write failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// External service error (e.g. message bus delivery)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is worth retrying
    ///
    /// Nothing in this crate retries automatically; callers decide.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::Persistence(_) | ApplicationError::ExternalService(_)
        )
    }

    /// Check if this error reports a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Domain(e) if e.is_not_found())
    }
}
