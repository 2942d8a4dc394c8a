use std::sync::Arc;

use serde_json::Value;

use domains::{AddComment, AddedComment, CommentRepository, Result, ThreadRepository};

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// Validates the payload, gates on thread existence, then persists.
    /// The two repository calls are separate round trips; the window is
    /// benign while threads cannot be deleted.
    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, user_id: &str, payload: &Value) -> Result<AddedComment> {
        let comment = AddComment::parse(payload)?;
        self.thread_repository
            .exist_thread(&comment.thread_id)
            .await?;
        self.comment_repository.add_comment(user_id, &comment).await
    }
}
