use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{DomainError, Result};
use crate::models::ThreadDetailRow;

/// Content shown in place of a soft-deleted comment. The stored content is
/// retained for audit and never exposed.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// Nested thread-detail read model, assembled from the flat join rows the
/// thread store returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl ThreadDetail {
    /// Rows must arrive ordered by comment creation time ascending; the
    /// projection preserves that order.
    pub fn from_rows(rows: &[ThreadDetailRow]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| DomainError::validation("DETAIL_THREAD.INVALID_INPUT"))?;

        if first.thread_id.is_empty()
            || first.title.is_empty()
            || first.body.is_empty()
            || first.thread_username.is_empty()
        {
            return Err(DomainError::validation(
                "DETAIL_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            ));
        }

        Ok(ThreadDetail {
            id: first.thread_id.clone(),
            title: first.title.clone(),
            body: first.body.clone(),
            date: first.thread_created_at,
            username: first.thread_username.clone(),
            comments: Self::map_comments(rows),
        })
    }

    fn map_comments(rows: &[ThreadDetailRow]) -> Vec<CommentDetail> {
        rows.iter()
            .filter_map(|row| {
                let id = row.comment_id.clone()?;
                Some(CommentDetail {
                    id,
                    username: row.comment_username.clone().unwrap_or_default(),
                    date: row.comment_created_at.unwrap_or(row.thread_created_at),
                    content: if row.comment_deleted_at.is_some() {
                        DELETED_COMMENT_PLACEHOLDER.to_string()
                    } else {
                        row.content.clone().unwrap_or_default()
                    },
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn thread_row() -> ThreadDetailRow {
        ThreadDetailRow {
            thread_id: "thread-123".into(),
            title: "sebuah thread".into(),
            body: "isi thread".into(),
            thread_created_at: Utc.with_ymd_and_hms(2025, 4, 20, 10, 0, 0).unwrap(),
            thread_username: "dicoding".into(),
            comment_id: None,
            content: None,
            comment_created_at: None,
            comment_deleted_at: None,
            comment_username: None,
        }
    }

    fn comment_row(id: &str, content: &str, minute: u32, deleted: bool) -> ThreadDetailRow {
        let created = Utc.with_ymd_and_hms(2025, 4, 20, 11, minute, 0).unwrap();
        ThreadDetailRow {
            comment_id: Some(id.into()),
            content: Some(content.into()),
            comment_created_at: Some(created),
            comment_deleted_at: deleted.then_some(created),
            comment_username: Some("johndoe".into()),
            ..thread_row()
        }
    }

    #[test]
    fn fails_on_empty_row_set() {
        let err = ThreadDetail::from_rows(&[]).unwrap_err();
        assert_eq!(err, DomainError::validation("DETAIL_THREAD.INVALID_INPUT"));
    }

    #[test]
    fn fails_when_thread_fields_are_missing() {
        let row = ThreadDetailRow {
            title: String::new(),
            ..thread_row()
        };
        let err = ThreadDetail::from_rows(&[row]).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("DETAIL_THREAD.NOT_CONTAIN_NEEDED_PROPERTY")
        );
    }

    #[test]
    fn thread_without_comments_yields_empty_comment_list() {
        let detail = ThreadDetail::from_rows(&[thread_row()]).unwrap();
        assert_eq!(detail.id, "thread-123");
        assert_eq!(detail.username, "dicoding");
        assert!(detail.comments.is_empty());
    }

    #[test]
    fn deleted_comment_content_is_replaced_with_placeholder() {
        let rows = vec![
            comment_row("comment-1", "komentar pertama", 0, false),
            comment_row("comment-2", "komentar kedua", 1, true),
        ];
        let detail = ThreadDetail::from_rows(&rows).unwrap();

        assert_eq!(detail.comments.len(), 2);
        assert_eq!(detail.comments[0].content, "komentar pertama");
        assert_eq!(detail.comments[1].content, "**komentar telah dihapus**");
    }

    #[test]
    fn comments_keep_the_row_order() {
        let rows = vec![
            comment_row("comment-1", "a", 0, false),
            comment_row("comment-2", "b", 1, false),
            comment_row("comment-3", "c", 2, false),
        ];
        let detail = ThreadDetail::from_rows(&rows).unwrap();
        let ids: Vec<_> = detail.comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["comment-1", "comment-2", "comment-3"]);
    }

    #[test]
    fn maps_comment_fields() {
        let detail =
            ThreadDetail::from_rows(&[comment_row("comment-1", "halo", 0, false)]).unwrap();
        let comment = &detail.comments[0];
        assert_eq!(comment.id, "comment-1");
        assert_eq!(comment.username, "johndoe");
        assert_eq!(
            comment.date,
            Utc.with_ymd_and_hms(2025, 4, 20, 11, 0, 0).unwrap()
        );
    }
}
