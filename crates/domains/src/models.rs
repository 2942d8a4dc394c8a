//! Persistent records and flat read-model rows as the stores return them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment row as stored. `deleted_at` set means the comment is inactive;
/// the column is never cleared once set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub thread_id: String,
    pub content: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// One row of the thread-detail join: thread columns plus the columns of at
/// most one comment. A thread without comments yields a single row whose
/// comment fields are all `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadDetailRow {
    pub thread_id: String,
    pub title: String,
    pub body: String,
    pub thread_created_at: DateTime<Utc>,
    pub thread_username: String,
    pub comment_id: Option<String>,
    pub content: Option<String>,
    pub comment_created_at: Option<DateTime<Utc>>,
    pub comment_deleted_at: Option<DateTime<Utc>>,
    pub comment_username: Option<String>,
}

/// Credentials extracted from a verified access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub id: String,
    pub username: String,
}
