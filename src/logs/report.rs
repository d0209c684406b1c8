//! Per-level counting, filtering and rendering.

use std::fmt::Write as _;

use serde::Serialize;

use super::parser::LogEntry;

/// Number of lines seen for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub level: String,
    pub count: usize,
}

/// Level counts in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelCounts(Vec<LevelCount>);

impl LevelCounts {
    /// Count for `level`, 0 if it never appeared.
    pub fn get(&self, level: &str) -> usize {
        self.0
            .iter()
            .find(|c| c.level == level)
            .map_or(0, |c| c.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelCount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn bump(&mut self, level: &str) {
        match self.0.iter_mut().find(|c| c.level == level) {
            Some(c) => c.count += 1,
            None => self.0.push(LevelCount {
                level: level.to_string(),
                count: 1,
            }),
        }
    }
}

/// Counts entries per level.
pub fn count_logs_by_level(logs: &[LogEntry]) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for entry in logs {
        counts.bump(&entry.level);
    }
    counts
}

/// Entries whose level matches exactly.
pub fn filter_logs_by_level<'a>(logs: &'a [LogEntry], level: &str) -> Vec<&'a LogEntry> {
    logs.iter().filter(|entry| entry.level == level).collect()
}

/// Renders the counts table.
pub fn render_counts(counts: &LevelCounts) -> String {
    let mut out = String::new();
    out.push_str("Level            | Count\n");
    out.push_str("-----------------|----------\n");
    for c in counts.iter() {
        let _ = writeln!(out, "{:<17}| {}", c.level, c.count);
    }
    out
}

/// Renders the detail block for one level.
pub fn render_details(logs: &[&LogEntry], level: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nLog details for level '{}':", level);
    for entry in logs {
        let _ = writeln!(out, "{} {} - {}", entry.date, entry.time, entry.message);
    }
    out
}
