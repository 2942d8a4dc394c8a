//! Static translation from internal validation identifiers to user-facing
//! messages. Loaded once at startup; unmapped identifiers pass through
//! unchanged.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static DIRECTORIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "ADD_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada",
        ),
        (
            "ADD_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION",
            "tidak dapat membuat thread baru karena tipe data tidak sesuai",
        ),
        (
            "ADD_THREAD.TITLE_LIMIT_CHAR",
            "tidak dapat membuat thread baru karena karakter title melebihi batas limit",
        ),
        (
            "ADDED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            "harus mengirimkan id, title dan owner",
        ),
        (
            "ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada",
        ),
        (
            "ADD_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
            "tidak dapat membuat comment baru karena tipe data tidak sesuai",
        ),
        (
            "ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            "harus mengirimkan id, content dan owner",
        ),
        (
            "DELETE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY",
            "tidak dapat menghapus comment karena properti yang dibutuhkan tidak ada",
        ),
        (
            "DELETE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION",
            "tidak dapat menghapus comment karena tipe data tidak sesuai",
        ),
        (
            "DETAIL_THREAD.INVALID_INPUT",
            "harus memiliki minimal satu thread",
        ),
        (
            "DETAIL_THREAD.NOT_CONTAIN_NEEDED_PROPERTY",
            "harus memiliki attribut thread_id, title, body, thread_created_at dan thread_username",
        ),
    ])
});

pub fn translate(identifier: &str) -> &str {
    DIRECTORIES
        .get(identifier)
        .copied()
        .unwrap_or(identifier)
}
