use std::sync::Arc;

use serde_json::Value;

use domains::{CommentRepository, DeleteComment, Result, ThreadRepository};

pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// Validates, gates on thread existence, resolves the active comment
    /// (ownership enforced in the store), then soft-deletes. An
    /// already-deleted comment resolves to `NotFound` at the lookup stage,
    /// so a second delete never silently succeeds.
    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, user_id: &str, payload: &Value) -> Result<()> {
        let payload = DeleteComment::parse(payload)?;

        self.thread_repository
            .exist_thread(&payload.thread_id)
            .await?;
        self.comment_repository
            .find_active_comment_by_id_and_user(user_id, &payload.comment_id)
            .await?;
        self.comment_repository
            .delete_comment_by_id(&payload.comment_id)
            .await
    }
}
