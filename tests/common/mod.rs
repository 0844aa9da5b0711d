//! Test helpers for board integration tests.

#![allow(dead_code)]

use anon_board::{BoardStore, CommentId, PostId};

/// Blank inputs that must never create an entity.
pub const BLANK_INPUTS: &[&str] = &["", " ", "   ", "\t", "\n", " \r\n\t "];

/// A store with `count` posts titled "post N" / "content N".
pub fn store_with_posts(count: usize) -> (BoardStore, Vec<PostId>) {
    let mut store = BoardStore::new();
    let ids = (1..=count)
        .map(|n| {
            store
                .submit_post(&format!("post {n}"), &format!("content {n}"))
                .expect("post should be created")
                .id
        })
        .collect();
    (store, ids)
}

/// A store with one post carrying `count` comments.
pub fn store_with_comments(count: usize) -> (BoardStore, PostId, Vec<CommentId>) {
    let (mut store, posts) = store_with_posts(1);
    let post_id = posts[0];
    let comments = (1..=count)
        .map(|n| {
            store
                .add_comment(post_id, &format!("comment {n}"))
                .expect("comment should be created")
                .id
        })
        .collect();
    (store, post_id, comments)
}

/// Comment count of every post, in board order.
pub fn comment_counts(store: &BoardStore) -> Vec<usize> {
    store
        .snapshot()
        .posts()
        .iter()
        .map(|p| p.comment_count())
        .collect()
}
