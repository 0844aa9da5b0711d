//! Plain-text rendering of a board snapshot.

use crate::board::{Board, Comment, Post, Reply};
use crate::config::{BoardConfig, DisplayConfig};
use crate::datetime::format_utc_datetime;

/// Options controlling how a board is rendered.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Heading printed above the posts.
    pub heading: String,
    /// Timezone for timestamps.
    pub timezone: String,
    /// strftime-style timestamp format.
    pub datetime_format: String,
    /// List replies under each comment instead of only counting them.
    pub expand_replies: bool,
}

impl RenderOptions {
    /// Build options from the board and display configuration.
    pub fn from_config(board: &BoardConfig, display: &DisplayConfig) -> Self {
        Self {
            heading: board.name.clone(),
            timezone: display.timezone.clone(),
            datetime_format: display.datetime_format.clone(),
            expand_replies: display.expand_replies,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default(), &DisplayConfig::default())
    }
}

/// Render the whole board.
pub fn render_board(board: &Board, options: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", options.heading));

    if board.is_empty() {
        out.push_str("\n(아직 글이 없습니다)\n");
        return out;
    }

    for post in board.posts() {
        out.push('\n');
        render_post(&mut out, post, options);
    }
    out
}

fn render_post(out: &mut String, post: &Post, options: &RenderOptions) {
    let heart = if post.user_liked { "♥" } else { "♡" };

    out.push_str(&format!("[#{}] {}\n", post.id, post.title));
    for line in post.content.lines() {
        out.push_str(&format!("  {line}\n"));
    }
    out.push_str(&format!(
        "  {heart} 좋아요 {}  |  댓글 {}개 · 답글 {}개  |  {}\n",
        post.likes,
        post.comment_count(),
        post.reply_count(),
        format_utc_datetime(&post.created_at, &options.timezone, &options.datetime_format)
    ));

    for comment in &post.comments {
        render_comment(out, comment, options);
    }
}

fn render_comment(out: &mut String, comment: &Comment, options: &RenderOptions) {
    out.push_str(&format!(
        "    - [#{}] {}  ({})  답글 {}개\n",
        comment.id,
        comment.content,
        format_utc_datetime(&comment.created_at, &options.timezone, &options.datetime_format),
        comment.reply_count()
    ));

    if options.expand_replies {
        for reply in &comment.replies {
            render_reply(out, reply, options);
        }
    }
}

fn render_reply(out: &mut String, reply: &Reply, options: &RenderOptions) {
    out.push_str(&format!(
        "        └ [#{}] {}  ({})\n",
        reply.id,
        reply.content,
        format_utc_datetime(&reply.created_at, &options.timezone, &options.datetime_format)
    ));
}
