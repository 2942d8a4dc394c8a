use std::sync::Arc;

use serde_json::Value;

use domains::{AddThread, AddedThread, Result, ThreadRepository};

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, user_id: &str, payload: &Value) -> Result<AddedThread> {
        let thread = AddThread::parse(payload)?;
        self.thread_repository.add_thread(user_id, &thread).await
    }
}
