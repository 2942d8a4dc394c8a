use serde_json::Value;

use crate::error::{DomainError, Result};

use super::verify_string_fields;

const TITLE_LIMIT: usize = 100;

/// Validated payload for creating a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
    pub title: String,
    pub body: String,
}

impl AddThread {
    pub fn parse(payload: &Value) -> Result<Self> {
        let mut fields = verify_string_fields(payload, "ADD_THREAD", &["title", "body"])?;
        let body = fields.pop().unwrap_or_default();
        let title = fields.pop().unwrap_or_default();

        if title.chars().count() > TITLE_LIMIT {
            return Err(DomainError::validation("ADD_THREAD.TITLE_LIMIT_CHAR"));
        }

        Ok(AddThread { title, body })
    }
}
