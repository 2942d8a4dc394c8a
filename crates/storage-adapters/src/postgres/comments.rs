use async_trait::async_trait;
use sqlx::{PgPool, Row};

use domains::{
    AddComment, AddedComment, Comment, CommentRepository, DomainError, Result,
};

use crate::generate_id;

use super::db_error;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn add_comment(&self, user_id: &str, comment: &AddComment) -> Result<AddedComment> {
        let id = generate_id("comment");
        let row = sqlx::query(
            "INSERT INTO comments (id, thread_id, content, owner) VALUES ($1, $2, $3, $4) \
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&comment.thread_id)
        .bind(&comment.content)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        AddedComment::try_new(row.get("id"), row.get("content"), row.get("owner"))
    }

    async fn find_active_comment_by_id_and_user(
        &self,
        user_id: &str,
        comment_id: &str,
    ) -> Result<Comment> {
        let row = sqlx::query(
            "SELECT id, thread_id, content, owner, created_at, updated_at, deleted_at \
             FROM comments WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        // Never-existed and already-deleted are indistinguishable here.
        let row = row.ok_or_else(|| DomainError::not_found("comment tidak tersedia"))?;

        let comment = Comment {
            id: row.get("id"),
            thread_id: row.get("thread_id"),
            content: row.get("content"),
            owner: row.get("owner"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            deleted_at: row.get("deleted_at"),
        };

        if comment.owner != user_id {
            return Err(DomainError::Authorization(
                "Anda tidak berhak mengakses resource ini".into(),
            ));
        }

        Ok(comment)
    }

    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<()> {
        let row = sqlx::query(
            "UPDATE comments SET deleted_at = now(), updated_at = now() \
             WHERE id = $1 RETURNING id",
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        match row {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found(
                "gagal menghapus data, comment tidak tersedia",
            )),
        }
    }
}
