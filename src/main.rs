use std::io::{self, BufRead, Write};

use tracing::{error, info};

use anon_board::{Config, Console, Outcome};

const DEFAULT_CONFIG_PATH: &str = "anon-board.toml";

fn main() {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    // Load configuration
    let config = match Config::load_with_env(&config_path).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = anon_board::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        anon_board::logging::init_console_only(&config.logging.level);
    }

    info!(board = %config.board.name, "anonymous board started");

    let mut console = Console::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{} - 'help' 로 명령어를 확인하세요", config.board.name);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        };

        match console.handle_line(&line) {
            Outcome::Output(text) if text.is_empty() => {}
            Outcome::Output(text) => {
                if writeln!(stdout, "{text}").and_then(|_| stdout.flush()).is_err() {
                    break;
                }
            }
            Outcome::Quit => break,
        }
    }

    info!(
        session_id = %console.store().session_id(),
        posts = console.store().snapshot().len(),
        "anonymous board stopped"
    );
}
