//! Error types for the service layer

use thiserror::Error;

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors that can occur during service resolution
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No factory was registered for the requested service type.
    #[error("service not registered: {type_name}")]
    ImplementationNotFound { type_name: &'static str },
}
