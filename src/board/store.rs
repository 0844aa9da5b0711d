//! Board store for the anonymous board.
//!
//! [`BoardStore`] owns the current [`Board`] snapshot and is its only
//! mutator. Each applied transition builds a new post sequence and swaps
//! it in whole, so a caller holding an older snapshot never observes a
//! partial update. Untouched posts, comments and replies are carried into
//! the new snapshot by `Arc`, which keeps their identity stable for change
//! detection.
//!
//! Transitions come in two flavors. The `try_*` methods report why a
//! transition was rejected; the plain methods treat a rejection as a
//! silent no-op and return `None`.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::comment::Comment;
use super::id::{CommentId, IdGenerator, PostId};
use super::post::Post;
use super::reply::Reply;
use super::validation::normalize_text;
use crate::{BoardError, Result};

/// Immutable snapshot of every post on the board, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    posts: Vec<Arc<Post>>,
}

impl Board {
    /// All posts in insertion order.
    pub fn posts(&self) -> &[Arc<Post>] {
        &self.posts
    }

    /// Find a post by ID.
    pub fn post(&self, post_id: PostId) -> Option<&Arc<Post>> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the board has no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Owner of the board state and its four transitions.
#[derive(Debug)]
pub struct BoardStore {
    board: Arc<Board>,
    ids: IdGenerator,
    session_id: Uuid,
}

impl BoardStore {
    /// Create an empty board for a new session.
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        debug!(%session_id, "board session started");
        Self {
            board: Arc::new(Board::default()),
            ids: IdGenerator::new(),
            session_id,
        }
    }

    /// Session identifier attached to this store's log events.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The current snapshot.
    ///
    /// A new `Arc` is produced by every applied transition; a rejected
    /// transition leaves the previous one in place.
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Append a new post. Blank title or content is a no-op.
    pub fn submit_post(&mut self, title: &str, content: &str) -> Option<Arc<Post>> {
        self.try_submit_post(title, content)
            .map_err(|e| self.log_rejected("submit_post", &e))
            .ok()
    }

    /// Flip the viewer's like on a post. Unknown post IDs are a no-op.
    pub fn toggle_like(&mut self, post_id: PostId) -> Option<Arc<Post>> {
        self.try_toggle_like(post_id)
            .map_err(|e| self.log_rejected("toggle_like", &e))
            .ok()
    }

    /// Append a comment to a post. Blank content or an unknown post is a no-op.
    pub fn add_comment(&mut self, post_id: PostId, content: &str) -> Option<Arc<Comment>> {
        self.try_add_comment(post_id, content)
            .map_err(|e| self.log_rejected("add_comment", &e))
            .ok()
    }

    /// Append a reply to a comment. Blank content, an unknown post or an
    /// unknown comment is a no-op.
    pub fn add_reply(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
        content: &str,
    ) -> Option<Arc<Reply>> {
        self.try_add_reply(post_id, comment_id, content)
            .map_err(|e| self.log_rejected("add_reply", &e))
            .ok()
    }

    /// Append a new post, reporting why it was rejected.
    pub fn try_submit_post(&mut self, title: &str, content: &str) -> Result<Arc<Post>> {
        let title = normalize_text("title", title)?;
        let content = normalize_text("content", content)?;

        let post = Arc::new(Post::new(self.ids.next_id(), title, content));

        let mut posts = Vec::with_capacity(self.board.len() + 1);
        posts.extend(self.board.posts.iter().cloned());
        posts.push(Arc::clone(&post));
        self.replace(posts);

        info!(session_id = %self.session_id, post_id = %post.id, "post submitted");
        Ok(post)
    }

    /// Flip the viewer's like on a post, reporting why it was rejected.
    pub fn try_toggle_like(&mut self, post_id: PostId) -> Result<Arc<Post>> {
        let target = self.find_post(post_id)?;
        let updated = Arc::new(target.with_like_toggled());

        self.replace_post(&updated);

        info!(
            session_id = %self.session_id,
            %post_id,
            likes = updated.likes,
            user_liked = updated.user_liked,
            "like toggled"
        );
        Ok(updated)
    }

    /// Append a comment to a post, reporting why it was rejected.
    pub fn try_add_comment(&mut self, post_id: PostId, content: &str) -> Result<Arc<Comment>> {
        let content = normalize_text("content", content)?;
        let target = self.find_post(post_id)?;

        let comment = Arc::new(Comment::new(self.ids.next_id(), content));
        self.replace_post(&Arc::new(target.with_comment(Arc::clone(&comment))));

        info!(
            session_id = %self.session_id,
            %post_id,
            comment_id = %comment.id,
            "comment added"
        );
        Ok(comment)
    }

    /// Append a reply to a comment, reporting why it was rejected.
    pub fn try_add_reply(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
        content: &str,
    ) -> Result<Arc<Reply>> {
        let content = normalize_text("content", content)?;
        let target = self.find_post(post_id)?;
        let comment = target
            .comment(comment_id)
            .cloned()
            .ok_or_else(|| {
                BoardError::NotFound(format!("comment {comment_id} on post {post_id}"))
            })?;

        let reply = Arc::new(Reply::new(self.ids.next_id(), content));
        let comment = Arc::new(comment.with_reply(Arc::clone(&reply)));
        self.replace_post(&Arc::new(target.with_comment_replaced(comment)));

        info!(
            session_id = %self.session_id,
            %post_id,
            %comment_id,
            reply_id = %reply.id,
            "reply added"
        );
        Ok(reply)
    }

    fn find_post(&self, post_id: PostId) -> Result<Arc<Post>> {
        self.board
            .post(post_id)
            .cloned()
            .ok_or_else(|| BoardError::NotFound(format!("post {post_id}")))
    }

    /// Rebuild the post sequence with `updated` in place of the post that
    /// shares its ID.
    fn replace_post(&mut self, updated: &Arc<Post>) {
        let posts = self
            .board
            .posts
            .iter()
            .map(|p| {
                if p.id == updated.id {
                    Arc::clone(updated)
                } else {
                    Arc::clone(p)
                }
            })
            .collect();
        self.replace(posts);
    }

    fn replace(&mut self, posts: Vec<Arc<Post>>) {
        self.board = Arc::new(Board { posts });
    }

    fn log_rejected(&self, transition: &str, err: &BoardError) {
        debug!(session_id = %self.session_id, transition, error = %err, "transition ignored");
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = BoardStore::new();
        assert!(store.snapshot().is_empty());
        assert_eq!(store.snapshot().len(), 0);
    }

    #[test]
    fn test_submit_post_trims_input() {
        let mut store = BoardStore::new();
        let post = store.submit_post("  Title ", "\nBody\t").unwrap();

        assert_eq!(post.title, "Title");
        assert_eq!(post.content, "Body");
        assert_eq!(post.likes, 0);
        assert!(!post.user_liked);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_submit_post_appends_to_end() {
        let mut store = BoardStore::new();
        let first = store.submit_post("one", "1").unwrap();
        let second = store.submit_post("two", "2").unwrap();

        let board = store.snapshot();
        assert_eq!(board.len(), 2);
        assert_eq!(board.posts()[0].id, first.id);
        assert_eq!(board.posts()[1].id, second.id);
    }

    #[test]
    fn test_try_submit_post_reports_blank_field() {
        let mut store = BoardStore::new();

        let err = store.try_submit_post("title", "   ").unwrap_err();
        assert!(matches!(err, BoardError::Validation(ref msg) if msg.contains("content")));

        let err = store.try_submit_post("", "content").unwrap_err();
        assert!(matches!(err, BoardError::Validation(ref msg) if msg.contains("title")));
    }

    #[test]
    fn test_rejected_transition_keeps_snapshot_and_ids() {
        let mut store = BoardStore::new();
        let before = store.snapshot();

        assert!(store.submit_post(" ", "content").is_none());
        assert!(store.toggle_like(PostId::new(99)).is_none());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));

        let post = store.submit_post("t", "c").unwrap();
        assert_eq!(post.id.get(), 1);
    }

    #[test]
    fn test_applied_transition_produces_fresh_snapshot() {
        let mut store = BoardStore::new();
        let post = store.submit_post("t", "c").unwrap();
        let before = store.snapshot();

        store.toggle_like(post.id).unwrap();
        let after = store.snapshot();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.posts()[0].likes, 0);
        assert_eq!(after.posts()[0].likes, 1);
    }

    #[test]
    fn test_toggle_like_shares_other_posts() {
        let mut store = BoardStore::new();
        let a = store.submit_post("a", "a").unwrap();
        let b = store.submit_post("b", "b").unwrap();

        store.toggle_like(a.id).unwrap();

        let board = store.snapshot();
        assert!(Arc::ptr_eq(&board.posts()[1], &b));
        assert!(!Arc::ptr_eq(&board.posts()[0], &a));
    }

    #[test]
    fn test_add_comment_unknown_post() {
        let mut store = BoardStore::new();
        store.submit_post("t", "c").unwrap();

        let err = store.try_add_comment(PostId::new(42), "hello").unwrap_err();
        assert!(matches!(err, BoardError::NotFound(_)));
        assert_eq!(err.to_string(), "post 42 not found");
    }

    #[test]
    fn test_add_comment_blank_checked_before_lookup() {
        let mut store = BoardStore::new();
        let err = store.try_add_comment(PostId::new(42), "  ").unwrap_err();
        assert!(matches!(err, BoardError::Validation(_)));
    }

    #[test]
    fn test_add_reply_unknown_comment() {
        let mut store = BoardStore::new();
        let post = store.submit_post("t", "c").unwrap();
        let before = store.snapshot();

        let err = store
            .try_add_reply(post.id, CommentId::new(77), "hi")
            .unwrap_err();

        assert!(matches!(err, BoardError::NotFound(ref what) if what.contains("comment 77")));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_add_reply_shares_sibling_comments() {
        let mut store = BoardStore::new();
        let post = store.submit_post("t", "c").unwrap();
        let first = store.add_comment(post.id, "first").unwrap();
        let second = store.add_comment(post.id, "second").unwrap();

        let reply = store.add_reply(post.id, second.id, "agreed").unwrap();

        let board = store.snapshot();
        let post = board.post(post.id).unwrap();
        assert!(Arc::ptr_eq(&post.comments[0], &first));
        assert!(Arc::ptr_eq(&post.comments[1].replies[0], &reply));
        assert_eq!(post.reply_count(), 1);
    }

    #[test]
    fn test_ids_unique_across_kinds() {
        let mut store = BoardStore::new();
        let post = store.submit_post("t", "c").unwrap();
        let comment = store.add_comment(post.id, "c").unwrap();
        let reply = store.add_reply(post.id, comment.id, "r").unwrap();

        assert_eq!(
            vec![post.id.get(), comment.id.get(), reply.id.get()],
            vec![1, 2, 3]
        );
    }
}
