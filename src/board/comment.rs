//! Comment model.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::CommentId;
use super::reply::Reply;

/// First-level response to a post, owning an append-only reply list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Unique comment ID.
    pub id: CommentId,
    /// Comment text, trimmed and non-empty.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Replies in insertion order.
    pub replies: Vec<Arc<Reply>>,
}

impl Comment {
    /// Create a comment with no replies, stamped with the current time.
    pub fn new(id: CommentId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at: Utc::now(),
            replies: Vec::new(),
        }
    }

    /// Number of replies.
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    /// A new version of this comment with `reply` appended.
    ///
    /// Existing replies are shared, not copied.
    pub fn with_reply(&self, reply: Arc<Reply>) -> Self {
        let mut replies = Vec::with_capacity(self.replies.len() + 1);
        replies.extend(self.replies.iter().cloned());
        replies.push(reply);
        Self {
            replies,
            ..self.clone()
        }
    }
}
