//! Input payload entities and output projections.
//!
//! Payloads come in as raw JSON so the two validation stages stay
//! distinguishable: a present-but-wrong-type value fails the type check,
//! never the presence check. Presence follows the loose semantics of the
//! HTTP form layer: `null`, `false`, `0` and `""` all count as absent.

mod add_comment;
mod add_thread;
mod added_comment;
mod added_thread;
mod delete_comment;
mod thread_detail;

pub use add_comment::AddComment;
pub use add_thread::AddThread;
pub use added_comment::AddedComment;
pub use added_thread::AddedThread;
pub use delete_comment::DeleteComment;
pub use thread_detail::{CommentDetail, ThreadDetail, DELETED_COMMENT_PLACEHOLDER};

use serde_json::Value;

use crate::error::{DomainError, Result};

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Extracts the named string fields from `payload`, in order. Presence of
/// every field is checked before any type check so the two failure modes
/// never shadow each other.
fn verify_string_fields(payload: &Value, prefix: &str, keys: &[&str]) -> Result<Vec<String>> {
    let values: Vec<Option<&Value>> = keys.iter().map(|key| payload.get(*key)).collect();

    if values.iter().any(|v| v.is_none() || v.is_some_and(is_falsy)) {
        return Err(DomainError::validation(format!(
            "{prefix}.NOT_CONTAIN_NEEDED_PROPERTY"
        )));
    }

    if values.iter().any(|v| !v.is_some_and(Value::is_string)) {
        return Err(DomainError::validation(format!(
            "{prefix}.NOT_MEET_DATA_TYPE_SPECIFICATION"
        )));
    }

    Ok(values
        .into_iter()
        .filter_map(|v| v.and_then(Value::as_str))
        .map(str::to_owned)
        .collect())
}
