use serde_json::Value;

use crate::error::Result;

use super::verify_string_fields;

/// Validated payload for soft-deleting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub thread_id: String,
    pub comment_id: String,
}

impl DeleteComment {
    pub fn parse(payload: &Value) -> Result<Self> {
        let mut fields =
            verify_string_fields(payload, "DELETE_COMMENT", &["thread_id", "comment_id"])?;
        let comment_id = fields.pop().unwrap_or_default();
        let thread_id = fields.pop().unwrap_or_default();
        Ok(DeleteComment {
            thread_id,
            comment_id,
        })
    }
}
