use serde::Serialize;

use crate::error::{DomainError, Result};

/// Projection returned after a thread is created. Built from a storage
/// RETURNING row, never from untrusted input; the string types are enforced
/// by the signature, only presence needs a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn try_new(id: String, title: String, owner: String) -> Result<Self> {
        if id.is_empty() || title.is_empty() || owner.is_empty() {
            return Err(DomainError::validation(
                "ADDED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            ));
        }
        Ok(AddedThread { id, title, owner })
    }
}
