//! Board module for the anonymous board.
//!
//! This module provides the in-memory post tree:
//! - Posts with a like counter and a comment list
//! - Comments with a reply list
//! - Replies (leaf level, no further nesting)
//! - The board store that owns the tree and applies transitions

mod comment;
mod id;
mod post;
mod reply;
mod store;
mod validation;

pub use comment::Comment;
pub use id::{
    CommentId, CommentMarker, Id, IdGenerator, PostId, PostMarker, ReplyId, ReplyMarker,
};
pub use post::Post;
pub use reply::Reply;
pub use store::{Board, BoardStore};
pub use validation::normalize_text;
