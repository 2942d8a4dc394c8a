//! Repository tests against a live Postgres. Run with a scratch database:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/forumapi_test cargo test -p storage-adapters \
//!     --features db-postgres -- --ignored
//! ```

use serde_json::json;
use sqlx::PgPool;

use domains::{
    AddComment, AddThread, CommentRepository, DomainError, ThreadDetail, ThreadRepository,
};
use storage_adapters::postgres::{PostgresCommentRepository, PostgresThreadRepository};

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let pool = PgPool::connect(&url).await.expect("connect");
    sqlx::migrate!("../../migrations").run(&pool).await.expect("migrate");
    sqlx::query("TRUNCATE comments, threads, users")
        .execute(&pool)
        .await
        .expect("truncate");
    sqlx::query("INSERT INTO users (id, username, password, fullname) VALUES ($1, $2, $3, $4)")
        .bind("user-123")
        .bind("dicoding")
        .bind("secret-hash")
        .bind("Dicoding Indonesia")
        .execute(&pool)
        .await
        .expect("seed user");
    pool
}

fn add_thread_payload() -> AddThread {
    AddThread::parse(&json!({ "title": "sebuah thread", "body": "isi thread" })).unwrap()
}

#[tokio::test]
#[ignore = "needs a running Postgres and DATABASE_URL"]
async fn added_thread_can_be_gated_on_and_read_back() {
    let pool = test_pool().await;
    let threads = PostgresThreadRepository::new(pool);

    let added = threads.add_thread("user-123", &add_thread_payload()).await.unwrap();
    assert!(added.id.starts_with("thread-"));
    assert_eq!(added.owner, "user-123");

    threads.exist_thread(&added.id).await.unwrap();

    let rows = threads.get_thread_detail_by_id(&added.id).await.unwrap();
    let detail = ThreadDetail::from_rows(&rows).unwrap();
    assert_eq!(detail.username, "dicoding");
    assert_eq!(detail.comments, vec![]);
}

#[tokio::test]
#[ignore = "needs a running Postgres and DATABASE_URL"]
async fn missing_thread_fails_the_existence_gate() {
    let pool = test_pool().await;
    let threads = PostgresThreadRepository::new(pool);

    let err = threads.exist_thread("thread-404").await.unwrap_err();
    assert_eq!(err, DomainError::not_found("thread tidak tersedia"));
}

#[tokio::test]
#[ignore = "needs a running Postgres and DATABASE_URL"]
async fn soft_deleted_comment_is_gone_for_lookups_but_kept_in_the_detail() {
    let pool = test_pool().await;
    let threads = PostgresThreadRepository::new(pool.clone());
    let comments = PostgresCommentRepository::new(pool);

    let thread = threads.add_thread("user-123", &add_thread_payload()).await.unwrap();
    let comment_payload =
        AddComment::parse(&json!({ "thread_id": thread.id, "content": "sebuah comment" }))
            .unwrap();
    let added = comments.add_comment("user-123", &comment_payload).await.unwrap();

    // Non-owner is rejected before anything is written.
    let err = comments
        .find_active_comment_by_id_and_user("user-456", &added.id)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::Authorization("Anda tidak berhak mengakses resource ini".into())
    );

    comments
        .find_active_comment_by_id_and_user("user-123", &added.id)
        .await
        .unwrap();
    comments.delete_comment_by_id(&added.id).await.unwrap();

    // A second delete attempt no longer finds an active comment.
    let err = comments
        .find_active_comment_by_id_and_user("user-123", &added.id)
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::not_found("comment tidak tersedia"));

    let rows = threads.get_thread_detail_by_id(&thread.id).await.unwrap();
    let detail = ThreadDetail::from_rows(&rows).unwrap();
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].content, "**komentar telah dihapus**");
}
