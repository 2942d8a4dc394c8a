use serde::Serialize;

use crate::error::{DomainError, Result};

/// Projection returned after a comment is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn try_new(id: String, content: String, owner: String) -> Result<Self> {
        if id.is_empty() || content.is_empty() || owner.is_empty() {
            return Err(DomainError::validation(
                "ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            ));
        }
        Ok(AddedComment { id, content, owner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fails_when_a_field_is_empty() {
        let err =
            AddedComment::try_new(String::new(), "sebuah comment".into(), "user-123".into())
                .unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY")
        );
    }

    #[test]
    fn creates_added_comment_correctly() {
        let added = AddedComment::try_new(
            "comment-123".into(),
            "sebuah comment".into(),
            "user-123".into(),
        )
        .unwrap();
        assert_eq!(added.id, "comment-123");
        assert_eq!(added.content, "sebuah comment");
        assert_eq!(added.owner, "user-123");
    }
}
