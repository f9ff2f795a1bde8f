//! Error types for the contact manager server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The HTTP status mapping for `ApiError` lives in the server layer so that the
//! service and repository layers stay framework-free.

use thiserror::Error;

/// Errors reported by the business layer to callers of the API.
///
/// Each variant corresponds to exactly one HTTP status class. The checks that
/// produce `NotFound` and `Forbidden` are ordered: existence is confirmed
/// before ownership, so probing a nonexistent id never reveals whether some
/// other tenant owns it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or missing input fields
    #[error("validation failed: {0}")]
    Validation(String),

    /// Missing, invalid, or expired credential, or an identity with no
    /// matching user record. The two cases are deliberately indistinguishable.
    #[error("authentication required")]
    Unauthenticated,

    /// Valid identity, but the aggregate belongs to a different owner
    #[error("access denied: {0}")]
    Forbidden(String),

    /// No such aggregate
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate unique key
    #[error("conflict: {0}")]
    Conflict(String),

    /// Unexpected lower-layer fault; the message is logged, never sent to callers
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors raised at the storage boundary.
///
/// Services translate these into `ApiError`: `Backend` faults become an opaque
/// `Internal` error so storage details never leak to callers.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested record does not exist
    #[error("record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated
    #[error("duplicate key: {0}")]
    Conflict(String),

    /// The store itself failed (lock poisoned, I/O, ...)
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => ApiError::NotFound(what),
            StoreError::Conflict(what) => ApiError::Conflict(what),
            StoreError::Backend(detail) => ApiError::Internal(detail),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
