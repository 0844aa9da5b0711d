//! Date/time display helpers for the anonymous board.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Default display format, shaped like a ko-KR locale timestamp.
pub const DEFAULT_FORMAT: &str = "%Y. %-m. %-d. %H:%M:%S";

/// Check that every specifier in `format` is one chrono understands.
pub fn is_valid_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Format a `DateTime<Utc>` in the given timezone.
///
/// Unknown timezone names fall back to UTC. A format that chrono rejects
/// falls back to [`DEFAULT_FORMAT`].
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    write_in_zone(dt, timezone, format).unwrap_or_else(|| {
        tracing::warn!(format, "invalid datetime format, using default");
        write_in_zone(dt, timezone, DEFAULT_FORMAT).unwrap_or_default()
    })
}

fn write_in_zone(dt: &DateTime<Utc>, timezone: &str, format: &str) -> Option<String> {
    let mut out = String::new();
    let written = match timezone.parse::<Tz>() {
        Ok(tz) => write!(out, "{}", dt.with_timezone(&tz).format(format)),
        Err(_) => write!(out, "{}", dt.format(format)),
    };
    written.ok().map(|_| out)
}
