//! Port traits the adapter crates implement.
//!
//! Storage adapters own their rows exclusively: nothing outside the
//! implementing store mutates thread or comment records directly.

use async_trait::async_trait;

use crate::entities::{AddComment, AddThread, AddedComment, AddedThread};
use crate::error::Result;
use crate::models::{AccessTokenClaims, Comment, ThreadDetailRow};

/// Data persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persists a new thread owned by `user_id` and returns its projection.
    async fn add_thread(&self, user_id: &str, thread: &AddThread) -> Result<AddedThread>;

    /// Existence gate for callers about to act on a thread's comments.
    /// Absence is a `NotFound` failure, never a negative result.
    async fn exist_thread(&self, thread_id: &str) -> Result<()>;

    /// Joins the thread with its author and all comments (with their
    /// authors), ordered by comment creation time ascending. A thread
    /// without comments yields one row with null comment fields.
    async fn get_thread_detail_by_id(&self, thread_id: &str) -> Result<Vec<ThreadDetailRow>>;
}

/// Data persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persists a new comment owned by `user_id`. The caller must already
    /// have confirmed the thread exists.
    async fn add_comment(&self, user_id: &str, comment: &AddComment) -> Result<AddedComment>;

    /// Resolves the comment by id where `deleted_at` is unset. `NotFound`
    /// covers both never-existed and already-deleted (indistinguishable by
    /// design); `Authorization` when the owner differs from `user_id`.
    async fn find_active_comment_by_id_and_user(
        &self,
        user_id: &str,
        comment_id: &str,
    ) -> Result<Comment>;

    /// Sets `deleted_at` on the matching row. Zero rows updated is a
    /// `NotFound` failure, a second safety net independent of the
    /// ownership check since the two round trips are not transactional.
    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<()>;
}

/// Access-token verification contract.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait TokenManager: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims>;
}
