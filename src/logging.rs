//! Tracing setup for the board binary.
//!
//! Stdout belongs to the console, so log events never go there: they are
//! written either to the file named in `[logging] file` or to stderr.
//! `RUST_LOG` directives are honored on top of the configured level.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Map a `[logging] level` value to a tracing level. Unknown names mean INFO.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(parse_level(level).into())
}

/// Install the global subscriber described by `config`.
///
/// With an empty `file` this is [`init_console_only`]. Otherwise the log
/// file is truncated, its parent directory created if missing, and events
/// are written without ANSI colors.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if config.file.is_empty() {
        init_console_only(&config.level);
        return Ok(());
    }

    let path = Path::new(&config.file);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let sink = Arc::new(File::create(path)?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(sink)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter_for(&config.level))
        .init();

    Ok(())
}

/// Install a colored stderr subscriber at `level`.
///
/// `main` falls back to this when the log file cannot be opened.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter_for(level))
        .init();
}
