use std::sync::Arc;

use domains::{Result, ThreadDetail, ThreadRepository};

pub struct GetThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl GetThreadDetailUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail> {
        let rows = self
            .thread_repository
            .get_thread_detail_by_id(thread_id)
            .await?;
        ThreadDetail::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use domains::{DomainError, MockThreadRepository, ThreadDetailRow};
    use serde_json::json;

    use super::*;

    fn rows() -> Vec<ThreadDetailRow> {
        let thread_created = Utc.with_ymd_and_hms(2025, 4, 20, 10, 0, 0).unwrap();
        let base = ThreadDetailRow {
            thread_id: "thread-123".into(),
            title: "sebuah thread".into(),
            body: "isi thread".into(),
            thread_created_at: thread_created,
            thread_username: "dicoding".into(),
            comment_id: None,
            content: None,
            comment_created_at: None,
            comment_deleted_at: None,
            comment_username: None,
        };
        let first = Utc.with_ymd_and_hms(2025, 4, 20, 11, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2025, 4, 20, 11, 5, 0).unwrap();
        vec![
            ThreadDetailRow {
                comment_id: Some("comment-1".into()),
                content: Some("komentar pertama".into()),
                comment_created_at: Some(first),
                comment_username: Some("johndoe".into()),
                ..base.clone()
            },
            ThreadDetailRow {
                comment_id: Some("comment-2".into()),
                content: Some("komentar kedua".into()),
                comment_created_at: Some(second),
                comment_deleted_at: Some(second),
                comment_username: Some("dicoding".into()),
                ..base
            },
        ]
    }

    #[tokio::test]
    async fn builds_the_detail_from_the_join_rows() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_get_thread_detail_by_id()
            .withf(|thread_id| thread_id == "thread-123")
            .once()
            .returning(|_| Ok(rows()));

        let use_case = GetThreadDetailUseCase::new(Arc::new(thread_repository));
        let detail = use_case.execute("thread-123").await.unwrap();

        assert_eq!(detail.id, "thread-123");
        assert_eq!(detail.comments.len(), 2);
        assert_eq!(detail.comments[0].content, "komentar pertama");
        assert_eq!(detail.comments[1].content, "**komentar telah dihapus**");
        // Round-trips through serde with the expected shape.
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["username"], json!("dicoding"));
        assert!(value["comments"].is_array());
    }

    #[tokio::test]
    async fn propagates_not_found_from_the_repository() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_get_thread_detail_by_id()
            .once()
            .returning(|_| Err(DomainError::not_found("thread tidak tersedia")));

        let use_case = GetThreadDetailUseCase::new(Arc::new(thread_repository));
        let err = use_case.execute("thread-404").await.unwrap_err();

        assert_eq!(err, DomainError::not_found("thread tidak tersedia"));
    }
}
