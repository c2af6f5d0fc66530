//! # Console log query.
//!
//! [`fetch_logs`] applies a [`LogQuery`] against a [`ConsoleSource`]:
//!
//! 1. enumerate buffered entries in chronological order;
//! 2. keep entries whose normalized tag is in the type set (empty = all)
//!    AND whose message matches the regex (empty = match-all);
//! 3. truncate kept messages at the first newline if `only_first_line`;
//! 4. reverse the kept sequence if not chronological;
//! 5. apply the cap last — always the first N of the (possibly reversed)
//!    sequence; 0 = unlimited.

use regex::Regex;

use crate::error::BridgeError;

use super::entry::{LogEntry, LogKind};
use super::source::ConsoleSource;

/// Parameters of one console log query.
#[derive(Clone, Debug)]
pub struct LogQuery {
    /// Severity tags to keep, case-insensitive. Empty = all.
    pub log_types: Vec<String>,
    /// Regex applied to the full message. Empty = match-all.
    pub filter: String,
    /// Maximum entries returned; 0 = unlimited.
    pub max_count: usize,
    /// Truncate each message at its first newline.
    pub only_first_line: bool,
    /// Oldest-first when true; newest-first otherwise.
    pub is_chronological: bool,
}

impl Default for LogQuery {
    /// Matches the remote surface defaults: up to 20 entries, first line
    /// only, newest first, no type or message filter.
    fn default() -> Self {
        Self {
            log_types: Vec::new(),
            filter: String::new(),
            max_count: 20,
            only_first_line: true,
            is_chronological: false,
        }
    }
}

/// Runs `query` against the buffered console entries.
pub fn fetch_logs(
    source: &dyn ConsoleSource,
    query: &LogQuery,
) -> Result<Vec<LogEntry>, BridgeError> {
    let pattern = if query.filter.is_empty() {
        None
    } else {
        Some(Regex::new(&query.filter)?)
    };
    let types: Vec<String> = query
        .log_types
        .iter()
        .map(|t| t.to_ascii_lowercase())
        .collect();

    let mut kept = Vec::new();
    for entry in source.entries() {
        let kind = LogKind::from_mode(entry.mode);
        if !types.is_empty() && !types.iter().any(|t| t == kind.as_str()) {
            continue;
        }
        if let Some(re) = &pattern {
            if !re.is_match(&entry.message) {
                continue;
            }
        }

        let message = if query.only_first_line {
            entry.message.split('\n').next().unwrap_or("").to_string()
        } else {
            entry.message
        };
        kept.push(LogEntry {
            message,
            severity: kind,
        });
    }

    if !query.is_chronological {
        kept.reverse();
    }
    if query.max_count > 0 {
        kept.truncate(query.max_count);
    }
    Ok(kept)
}

/// Empties the host console buffer. Cannot be reversed.
pub fn clear_logs(source: &dyn ConsoleSource) {
    source.clear();
}
