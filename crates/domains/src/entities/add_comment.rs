use serde_json::Value;

use crate::error::Result;

use super::verify_string_fields;

/// Validated payload for commenting on a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    pub thread_id: String,
    pub content: String,
}

impl AddComment {
    pub fn parse(payload: &Value) -> Result<Self> {
        let mut fields = verify_string_fields(payload, "ADD_COMMENT", &["thread_id", "content"])?;
        let content = fields.pop().unwrap_or_default();
        let thread_id = fields.pop().unwrap_or_default();
        Ok(AddComment { thread_id, content })
    }
}
