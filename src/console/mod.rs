//! Line-oriented console for the anonymous board.
//!
//! The console is a thin rendering layer over [`BoardStore`]: each input
//! line becomes one [`Command`], the command runs one transition, and the
//! result is turned into text. The console keeps no board state of its own.

mod command;
mod render;

pub use command::{format_help, get_command_help, Command, CommandError, CommandInfo};
pub use render::{render_board, RenderOptions};

use crate::board::BoardStore;
use crate::config::Config;
use crate::BoardError;

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading.
    Output(String),
    /// Stop reading input.
    Quit,
}

/// Console session wrapping a board store.
#[derive(Debug)]
pub struct Console {
    store: BoardStore,
    options: RenderOptions,
}

impl Console {
    /// Create a console over a fresh, empty board.
    pub fn new(config: &Config) -> Self {
        Self::with_store(
            BoardStore::new(),
            RenderOptions::from_config(&config.board, &config.display),
        )
    }

    /// Create a console over an existing store.
    pub fn with_store(store: BoardStore, options: RenderOptions) -> Self {
        Self { store, options }
    }

    /// The underlying store.
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Parse and run one input line.
    ///
    /// Blank lines produce empty output. Parse errors are reported as text.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(CommandError::Empty) => Outcome::Output(String::new()),
            Err(e) => Outcome::Output(format!("오류: {e}")),
        }
    }

    /// Run one command.
    ///
    /// Rejected transitions leave the board unchanged and report why.
    pub fn execute(&mut self, command: Command) -> Outcome {
        tracing::trace!(command = command.name(), "executing console command");

        let text = match command {
            Command::Post { title, content } => {
                match self.store.try_submit_post(&title, &content) {
                    Ok(post) => format!("글이 등록되었습니다 (#{})", post.id),
                    Err(e) => rejected(&e),
                }
            }
            Command::Like(post_id) => match self.store.try_toggle_like(post_id) {
                Ok(post) if post.user_liked => {
                    format!("#{} 좋아요 ({})", post.id, post.likes)
                }
                Ok(post) => format!("#{} 좋아요 취소 ({})", post.id, post.likes),
                Err(e) => rejected(&e),
            },
            Command::Comment { post_id, content } => {
                match self.store.try_add_comment(post_id, &content) {
                    Ok(comment) => format!("댓글이 등록되었습니다 (#{})", comment.id),
                    Err(e) => rejected(&e),
                }
            }
            Command::Reply {
                post_id,
                comment_id,
                content,
            } => match self.store.try_add_reply(post_id, comment_id, &content) {
                Ok(reply) => format!("답글이 등록되었습니다 (#{})", reply.id),
                Err(e) => rejected(&e),
            },
            Command::Show => render_board(&self.store.snapshot(), &self.options),
            Command::Export => match serde_json::to_string_pretty(&*self.store.snapshot()) {
                Ok(json) => json,
                Err(e) => format!("오류: {e}"),
            },
            Command::Help => format_help(),
            Command::Quit => return Outcome::Quit,
        };

        Outcome::Output(text)
    }
}

fn rejected(err: &BoardError) -> String {
    format!("변경 사항 없음: {err}")
}
