//! Reply model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::ReplyId;

/// Second-level response to a comment. Replies do not nest further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Unique reply ID.
    pub id: ReplyId,
    /// Reply text, trimmed and non-empty.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Reply {
    /// Create a reply stamped with the current time.
    pub fn new(id: ReplyId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
