//! Shared fixtures for the end-to-end router tests: a router wired exactly
//! like the binary (real JWT verification, mock stores) plus request and
//! body helpers.

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::{json, Value};

use api_adapters::{build_router, AppState};
use auth_adapters::JwtTokenManager;
use domains::{MockCommentRepository, MockThreadRepository, ThreadDetailRow};

pub const ACCESS_TOKEN_KEY: &str = "integration-access-token-key";

/// Builds the application the way `cmd/forum-api` wires it, with the
/// stores replaced by mocks.
pub fn forum_app(threads: MockThreadRepository, comments: MockCommentRepository) -> Router {
    build_router(Arc::new(AppState::new(
        Arc::new(threads),
        Arc::new(comments),
        Arc::new(JwtTokenManager::new(ACCESS_TOKEN_KEY)),
    )))
}

/// A real HS256 access token for the given user, far from expiry.
pub fn access_token(user_id: &str, username: &str) -> String {
    let claims = json!({
        "id": user_id,
        "username": username,
        "exp": 4_102_444_800u64, // 2100-01-01
    });
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(ACCESS_TOKEN_KEY.as_bytes()),
    )
    .expect("token encoding")
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn thread_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 20, 10, 0, 0).unwrap()
}

/// One join row carrying only the thread columns (a thread with no
/// comments produces exactly this).
pub fn bare_thread_row() -> ThreadDetailRow {
    ThreadDetailRow {
        thread_id: "thread-123".into(),
        title: "sebuah thread".into(),
        body: "isi thread".into(),
        thread_created_at: thread_created_at(),
        thread_username: "dicoding".into(),
        comment_id: None,
        content: None,
        comment_created_at: None,
        comment_deleted_at: None,
        comment_username: None,
    }
}

pub fn comment_row(
    id: &str,
    username: &str,
    content: &str,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
) -> ThreadDetailRow {
    ThreadDetailRow {
        comment_id: Some(id.into()),
        content: Some(content.into()),
        comment_created_at: Some(created_at),
        comment_deleted_at: deleted_at,
        comment_username: Some(username.into()),
        ..bare_thread_row()
    }
}
