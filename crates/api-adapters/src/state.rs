use std::sync::Arc;

use domains::{CommentRepository, ThreadRepository, TokenManager};
use services::{
    AddCommentUseCase, AddThreadUseCase, DeleteCommentUseCase, GetThreadDetailUseCase,
};

/// Shared handler state: the use cases plus the token verifier. Wired
/// explicitly at startup from concrete store instances; no runtime
/// registry involved.
pub struct AppState {
    pub add_thread: AddThreadUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub get_thread_detail: GetThreadDetailUseCase,
    pub token_manager: Arc<dyn TokenManager>,
}

impl AppState {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        Self {
            add_thread: AddThreadUseCase::new(thread_repository.clone()),
            add_comment: AddCommentUseCase::new(
                thread_repository.clone(),
                comment_repository.clone(),
            ),
            delete_comment: DeleteCommentUseCase::new(
                thread_repository.clone(),
                comment_repository,
            ),
            get_thread_detail: GetThreadDetailUseCase::new(thread_repository),
            token_manager,
        }
    }
}
