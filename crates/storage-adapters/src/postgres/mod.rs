//! Postgres implementations of the persistence ports.
//!
//! Rows are mapped by hand from `sqlx::Row`; sqlx failures become opaque
//! `DomainError::Database` values after being logged, so driver messages
//! never reach a client.

mod comments;
mod threads;

pub use comments::PostgresCommentRepository;
pub use threads::PostgresThreadRepository;

use domains::DomainError;

pub(crate) fn db_error(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "database query failed");
    DomainError::Database(err.to_string())
}
