//! Centralized error handling for the forum domain.
//!
//! `Validation` carries an internal identifier (e.g.
//! `ADD_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`) that the HTTP boundary
//! translates into a user-facing message. The other variants already carry
//! user-facing text, except `Database`, whose message must never be leaked.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Payload shape/type/length violation. Surfaced as 400.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or unverifiable credentials. Surfaced as 401.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// Caller is not the resource owner. Surfaced as 403.
    #[error("authorization error: {0}")]
    Authorization(String),

    /// Referenced thread/comment absent (or, for comments, absent-or-deleted).
    /// Surfaced as 404.
    #[error("{0}")]
    NotFound(String),

    /// Storage failure. Surfaced as an opaque 500.
    #[error("database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn validation(identifier: impl Into<String>) -> Self {
        DomainError::Validation(identifier.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }
}

/// A specialized Result type for forum domain logic.
pub type Result<T> = std::result::Result<T, DomainError>;
