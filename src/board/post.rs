//! Post model for the anonymous board.
//!
//! A post carries its like counter, the local viewer's like flag and an
//! append-only comment list. Every update helper returns a new `Post`;
//! comments that are not touched are shared with the previous version.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::comment::Comment;
use super::id::{CommentId, PostId};

/// Top-level submission on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Unique post ID.
    pub id: PostId,
    /// Post title, trimmed and non-empty.
    pub title: String,
    /// Post body, trimmed and non-empty.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Like counter.
    pub likes: u32,
    /// Whether the local viewer has liked this post.
    pub user_liked: bool,
    /// Comments in insertion order.
    pub comments: Vec<Arc<Comment>>,
}

impl Post {
    /// Create an unliked post with no comments, stamped with the current time.
    pub fn new(id: PostId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
            likes: 0,
            user_liked: false,
            comments: Vec::new(),
        }
    }

    /// Find a comment by ID.
    pub fn comment(&self, comment_id: CommentId) -> Option<&Arc<Comment>> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// Number of comments.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Number of replies across all comments.
    pub fn reply_count(&self) -> usize {
        self.comments.iter().map(|c| c.reply_count()).sum()
    }

    /// A new version of this post with the viewer's like flipped.
    ///
    /// Liking adds one to the counter, un-liking removes one. The counter
    /// never drops below zero.
    pub fn with_like_toggled(&self) -> Self {
        let user_liked = !self.user_liked;
        let likes = if user_liked {
            self.likes.saturating_add(1)
        } else {
            if self.likes == 0 {
                tracing::warn!(post_id = %self.id, "un-like on a post with zero likes");
            }
            self.likes.saturating_sub(1)
        };
        Self {
            likes,
            user_liked,
            ..self.clone()
        }
    }

    /// A new version of this post with `comment` appended.
    pub fn with_comment(&self, comment: Arc<Comment>) -> Self {
        let mut comments = Vec::with_capacity(self.comments.len() + 1);
        comments.extend(self.comments.iter().cloned());
        comments.push(comment);
        Self {
            comments,
            ..self.clone()
        }
    }

    /// A new version of this post where the comment with `replacement.id`
    /// is swapped for `replacement`. Sibling comments are shared.
    ///
    /// If no comment has that ID the comment list is carried over unchanged.
    pub fn with_comment_replaced(&self, replacement: Arc<Comment>) -> Self {
        let comments = self
            .comments
            .iter()
            .map(|c| {
                if c.id == replacement.id {
                    Arc::clone(&replacement)
                } else {
                    Arc::clone(c)
                }
            })
            .collect();
        Self {
            comments,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new(PostId::new(1), "T", "C")
    }

    #[test]
    fn test_new_post_defaults() {
        let post = sample_post();
        assert_eq!(post.title, "T");
        assert_eq!(post.content, "C");
        assert_eq!(post.likes, 0);
        assert!(!post.user_liked);
        assert_eq!(post.comment_count(), 0);
        assert_eq!(post.reply_count(), 0);
    }

    #[test]
    fn test_like_toggle_round_trip() {
        let post = sample_post();

        let liked = post.with_like_toggled();
        assert_eq!(liked.likes, 1);
        assert!(liked.user_liked);

        let unliked = liked.with_like_toggled();
        assert_eq!(unliked.likes, 0);
        assert!(!unliked.user_liked);
        assert_eq!(unliked, post);
    }

    #[test]
    fn test_unlike_floors_at_zero() {
        let mut post = sample_post();
        post.user_liked = true;
        post.likes = 0;

        let unliked = post.with_like_toggled();
        assert_eq!(unliked.likes, 0);
        assert!(!unliked.user_liked);
    }

    #[test]
    fn test_with_comment_appends_in_order() {
        let post = sample_post()
            .with_comment(Arc::new(Comment::new(CommentId::new(2), "first")))
            .with_comment(Arc::new(Comment::new(CommentId::new(3), "second")));

        let contents: Vec<&str> = post.comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[test]
    fn test_with_comment_replaced_shares_siblings() {
        let first = Arc::new(Comment::new(CommentId::new(2), "first"));
        let second = Arc::new(Comment::new(CommentId::new(3), "second"));
        let post = sample_post()
            .with_comment(Arc::clone(&first))
            .with_comment(Arc::clone(&second));

        let replacement = Arc::new(Comment {
            content: "edited".to_string(),
            ..(*second).clone()
        });
        let updated = post.with_comment_replaced(replacement);

        assert!(Arc::ptr_eq(&updated.comments[0], &first));
        assert_eq!(updated.comments[1].content, "edited");
        assert_eq!(post.comments[1].content, "second");
    }

    #[test]
    fn test_comment_lookup() {
        let post = sample_post().with_comment(Arc::new(Comment::new(CommentId::new(9), "c")));
        assert!(post.comment(CommentId::new(9)).is_some());
        assert!(post.comment(CommentId::new(10)).is_none());
    }
}
