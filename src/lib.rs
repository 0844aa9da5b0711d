//! Anonymous Board
//!
//! An in-memory board of posts, comments and replies, with a like toggle
//! per post, driven by four synchronous transitions on a single store.

pub mod board;
pub mod config;
pub mod console;
pub mod datetime;
pub mod error;
pub mod logging;

pub use board::{
    Board, BoardStore, Comment, CommentId, IdGenerator, Post, PostId, Reply, ReplyId,
};
pub use config::Config;
pub use console::{Command, CommandError, Console, Outcome, RenderOptions};
pub use error::{BoardError, Result};
