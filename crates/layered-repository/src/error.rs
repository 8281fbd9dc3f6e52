//! Error types for the repository layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No factory was registered for the requested special repository or
    /// service type.
    #[error("implementation not registered: {type_name}")]
    ImplementationNotFound { type_name: &'static str },
}
