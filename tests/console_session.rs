//! Console session tests.
//!
//! Drives the console line by line the way the binary does.

use anon_board::{Config, Console, Outcome};

fn run(console: &mut Console, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| match console.handle_line(line) {
            Outcome::Output(text) => text,
            Outcome::Quit => "<quit>".to_string(),
        })
        .collect()
}

#[test]
fn test_full_session() {
    let mut console = Console::new(&Config::default());

    let out = run(
        &mut console,
        &[
            "post 첫 글 | 안녕하세요",
            "like 1",
            "comment 1 반가워요",
            "reply 1 2 저도요",
            "show",
            "quit",
        ],
    );

    assert_eq!(out[0], "글이 등록되었습니다 (#1)");
    assert_eq!(out[1], "#1 좋아요 (1)");
    assert_eq!(out[2], "댓글이 등록되었습니다 (#2)");
    assert_eq!(out[3], "답글이 등록되었습니다 (#3)");
    assert!(out[4].contains("[#1] 첫 글"));
    assert!(out[4].contains("♥ 좋아요 1"));
    assert!(out[4].contains("반가워요"));
    assert!(out[4].contains("저도요"));
    assert_eq!(out[5], "<quit>");
}

#[test]
fn test_rejections_leave_board_unchanged() {
    let mut console = Console::new(&Config::default());
    run(&mut console, &["post T | C"]);
    let before = console.store().snapshot();

    let out = run(
        &mut console,
        &["post  | body", "like 5", "comment 5 hi", "reply 1 9 hi", "comment 1   "],
    );

    for line in &out {
        assert!(line.starts_with("변경 사항 없음"), "unexpected output: {line}");
    }
    assert_eq!(*console.store().snapshot(), *before);
}

#[test]
fn test_collapsed_replies_from_config() {
    let config = Config::parse("[display]\nexpand_replies = false\n").unwrap();
    let mut console = Console::new(&config);

    let out = run(
        &mut console,
        &["post T | C", "comment 1 c", "reply 1 2 hidden reply", "show"],
    );

    assert!(out[3].contains("답글 1개"));
    assert!(!out[3].contains("hidden reply"));
}
