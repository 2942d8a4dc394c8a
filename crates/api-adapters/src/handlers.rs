use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Merges path parameters into the JSON body before entity validation, so
/// a non-object body simply fails the payload checks instead of panicking.
fn merge_into_payload(payload: Value, fields: &[(&str, &str)]) -> Value {
    let mut object = payload.as_object().cloned().unwrap_or_default();
    for (key, value) in fields {
        object.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    Value::Object(object)
}

pub async fn post_thread(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let added_thread = state.add_thread.execute(&claims.id, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedThread": added_thread } })),
    ))
}

pub async fn post_comment(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(thread_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = merge_into_payload(payload, &[("thread_id", thread_id.as_str())]);
    let added_comment = state.add_comment.execute(&claims.id, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedComment": added_comment } })),
    ))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = json!({ "thread_id": thread_id, "comment_id": comment_id });
    state.delete_comment.execute(&claims.id, &payload).await?;
    Ok(Json(json!({ "status": "success" })))
}

pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let thread = state.get_thread_detail.execute(&thread_id).await?;
    Ok(Json(
        json!({ "status": "success", "data": { "thread": thread } }),
    ))
}
