use thiserror::Error;

/// Failures raised while reading from the catalog store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be checked out of the pool.
    #[error(transparent)]
    Connection(#[from] diesel::r2d2::PoolError),
    /// The query itself failed.
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
    /// A stored row violates a domain constraint.
    #[error("invalid stored value: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
