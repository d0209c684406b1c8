//! Log line parsing and loading.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use serde::Serialize;

use crate::{AssistantError, AssistantResult};

/// A parsed log line: `DATE TIME LEVEL message...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub date: String,
    pub time: String,
    pub level: String,
    pub message: String,
}

/// Parses one line.
///
/// Returns `None` for blank lines and lines with fewer than three tokens.
/// Message tokens are re-joined with single spaces.
pub fn parse_log_line(line: &str) -> Option<LogEntry> {
    let mut tokens = line.split_whitespace();
    let date = tokens.next()?;
    let time = tokens.next()?;
    let level = tokens.next()?;
    let message = tokens.collect::<Vec<_>>().join(" ");

    Some(LogEntry {
        date: date.to_string(),
        time: time.to_string(),
        level: level.to_string(),
        message,
    })
}

/// Reads every parseable line from a buffered reader.
pub fn read_logs<R: BufRead>(reader: R) -> std::io::Result<Vec<LogEntry>> {
    let mut logs = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_log_line(&line) {
            Some(entry) => logs.push(entry),
            None if line.trim().is_empty() => {}
            None => tracing::debug!(line = number + 1, "skipping malformed log line"),
        }
    }
    Ok(logs)
}

/// Loads a log file.
pub fn load_logs<P: AsRef<Path>>(path: P) -> AssistantResult<Vec<LogEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AssistantError::LogFileNotFound(path.to_path_buf()),
        _ => AssistantError::LogFileRead(path.to_path_buf(), e),
    })?;

    let logs = read_logs(BufReader::new(file))
        .map_err(|e| AssistantError::LogFileRead(path.to_path_buf(), e))?;

    tracing::info!(path = %path.display(), entries = logs.len(), "log file loaded");
    Ok(logs)
}
