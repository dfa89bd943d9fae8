use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// A read against the catalog store failed. Carries the store message.
    #[error("{0}")]
    Store(String),
    /// Request parameters could not be interpreted.
    #[error("{0}")]
    Form(String),
    /// A computed value broke a domain constraint.
    #[error("{0}")]
    TypeConstraint(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
