use async_trait::async_trait;
use sqlx::{PgPool, Row};

use domains::{
    AddThread, AddedThread, DomainError, Result, ThreadDetailRow, ThreadRepository,
};

use crate::generate_id;

use super::db_error;

const THREAD_DETAIL_SQL: &str = "\
SELECT
    t.id AS thread_id,
    t.title,
    t.body,
    t.created_at AS thread_created_at,
    u.username AS thread_username,
    c.id AS comment_id,
    c.content,
    c.created_at AS comment_created_at,
    c.deleted_at AS comment_deleted_at,
    u2.username AS comment_username
FROM threads t
INNER JOIN users u ON u.id = t.owner
LEFT JOIN comments c ON c.thread_id = t.id
LEFT JOIN users u2 ON u2.id = c.owner
WHERE t.id = $1
ORDER BY c.created_at ASC";

pub struct PostgresThreadRepository {
    pool: PgPool,
}

impl PostgresThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PostgresThreadRepository {
    async fn add_thread(&self, user_id: &str, thread: &AddThread) -> Result<AddedThread> {
        let id = generate_id("thread");
        let row = sqlx::query(
            "INSERT INTO threads (id, title, body, owner) VALUES ($1, $2, $3, $4) \
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        AddedThread::try_new(row.get("id"), row.get("title"), row.get("owner"))
    }

    async fn exist_thread(&self, thread_id: &str) -> Result<()> {
        let row = sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        match row {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("thread tidak tersedia")),
        }
    }

    async fn get_thread_detail_by_id(&self, thread_id: &str) -> Result<Vec<ThreadDetailRow>> {
        let rows = sqlx::query(THREAD_DETAIL_SQL)
            .bind(thread_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        if rows.is_empty() {
            return Err(DomainError::not_found("thread tidak tersedia"));
        }

        Ok(rows
            .into_iter()
            .map(|row| ThreadDetailRow {
                thread_id: row.get("thread_id"),
                title: row.get("title"),
                body: row.get("body"),
                thread_created_at: row.get("thread_created_at"),
                thread_username: row.get("thread_username"),
                comment_id: row.get("comment_id"),
                content: row.get("content"),
                comment_created_at: row.get("comment_created_at"),
                comment_deleted_at: row.get("comment_deleted_at"),
                comment_username: row.get("comment_username"),
            })
            .collect())
    }
}
