//! Log file analyzer.
//!
//! Reads `DATE TIME LEVEL message...` lines, counts them per level and
//! lists the lines of a single level.

mod parser;
mod report;

pub use parser::{load_logs, parse_log_line, read_logs, LogEntry};
pub use report::{
    count_logs_by_level, filter_logs_by_level, render_counts, render_details, LevelCount,
    LevelCounts,
};
