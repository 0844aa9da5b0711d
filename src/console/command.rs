//! Console command parser for the anonymous board.
//!
//! One line of input maps to one [`Command`]. Board text (titles, comment
//! bodies) is passed through untrimmed beyond word splitting; blank text is
//! left for the store to reject.

use std::str::FromStr;

use thiserror::Error;

use crate::board::{CommentId, PostId};

/// Separator between title and content in `post`.
pub const TITLE_SEPARATOR: char = '|';

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a new post.
    Post { title: String, content: String },
    /// Toggle the like on a post.
    Like(PostId),
    /// Comment on a post.
    Comment { post_id: PostId, content: String },
    /// Reply to a comment.
    Reply {
        post_id: PostId,
        comment_id: CommentId,
        content: String,
    },
    /// Render the board.
    Show,
    /// Print the board as JSON.
    Export,
    /// Show help message.
    Help,
    /// Leave the console.
    Quit,
}

impl Command {
    /// Get the command name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Post { .. } => "post",
            Command::Like(_) => "like",
            Command::Comment { .. } => "comment",
            Command::Reply { .. } => "reply",
            Command::Show => "show",
            Command::Export => "export",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

/// Errors from parsing a console line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was typed.
    #[error("empty command")]
    Empty,

    /// The first word is not a known command.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// A required argument is missing.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// An id argument is not a number.
    #[error("invalid id: {0}")]
    InvalidId(String),
}

/// Split off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], &input[pos..]),
        None => (input, ""),
    }
}

fn parse_id<T: FromStr>(word: &str, usage: &'static str) -> Result<T, CommandError> {
    if word.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    word.parse()
        .map_err(|_| CommandError::InvalidId(word.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (cmd, rest) = split_word(line);
        if cmd.is_empty() {
            return Err(CommandError::Empty);
        }

        match cmd.to_lowercase().as_str() {
            "post" | "p" => {
                const USAGE: &str = "post <title> | <content>";
                let (title, content) = rest
                    .split_once(TITLE_SEPARATOR)
                    .ok_or(CommandError::Usage(USAGE))?;
                Ok(Command::Post {
                    title: title.to_string(),
                    content: content.to_string(),
                })
            }
            "like" | "l" => {
                const USAGE: &str = "like <post-id>";
                let (id, _) = split_word(rest);
                Ok(Command::Like(parse_id(id, USAGE)?))
            }
            "comment" | "c" => {
                const USAGE: &str = "comment <post-id> <text>";
                let (id, content) = split_word(rest);
                Ok(Command::Comment {
                    post_id: parse_id(id, USAGE)?,
                    content: content.to_string(),
                })
            }
            "reply" | "r" => {
                const USAGE: &str = "reply <post-id> <comment-id> <text>";
                let (post, rest) = split_word(rest);
                let (comment, content) = split_word(rest);
                Ok(Command::Reply {
                    post_id: parse_id(post, USAGE)?,
                    comment_id: parse_id(comment, USAGE)?,
                    content: content.to_string(),
                })
            }
            "show" | "s" | "ls" => Ok(Command::Show),
            "export" | "json" => Ok(Command::Export),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(cmd.to_string())),
        }
    }
}

/// Console command information for help display.
pub struct CommandInfo {
    /// Command syntax.
    pub syntax: &'static str,
    /// Command aliases.
    pub aliases: &'static [&'static str],
    /// Command description.
    pub description: &'static str,
}

/// Get all available command information.
pub fn get_command_help() -> Vec<CommandInfo> {
    vec![
        CommandInfo {
            syntax: "post <제목> | <내용>",
            aliases: &["p"],
            description: "새 글을 등록합니다",
        },
        CommandInfo {
            syntax: "like <글 번호>",
            aliases: &["l"],
            description: "좋아요를 누르거나 취소합니다",
        },
        CommandInfo {
            syntax: "comment <글 번호> <내용>",
            aliases: &["c"],
            description: "댓글을 등록합니다",
        },
        CommandInfo {
            syntax: "reply <글 번호> <댓글 번호> <내용>",
            aliases: &["r"],
            description: "댓글에 답글을 등록합니다",
        },
        CommandInfo {
            syntax: "show",
            aliases: &["s", "ls"],
            description: "게시판을 표시합니다",
        },
        CommandInfo {
            syntax: "export",
            aliases: &["json"],
            description: "게시판을 JSON으로 출력합니다",
        },
        CommandInfo {
            syntax: "help",
            aliases: &["h", "?"],
            description: "도움말을 표시합니다",
        },
        CommandInfo {
            syntax: "quit",
            aliases: &["q", "exit"],
            description: "종료합니다",
        },
    ]
}

/// Format the help message for display.
pub fn format_help() -> String {
    let mut lines = vec!["=== 명령어 ===".to_string(), String::new()];

    for info in get_command_help() {
        lines.push(info.syntax.to_string());
        lines.push(format!("  {} ({})", info.description, info.aliases.join(", ")));
    }

    lines.join("\n")
}
