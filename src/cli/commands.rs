//! Implementation of the CLI commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::bot::Session;
use crate::cache::FibonacciCache;
use crate::logs::{
    count_logs_by_level, filter_logs_by_level, load_logs, render_counts, render_details,
};
use crate::profit::{generate_numbers, sum_profit};
use crate::types::config::{Config, DEFAULT_CONFIG_FILE};
use crate::{AssistantError, AssistantResult};

/// Writes a default configuration into the target directory.
///
/// An existing file is left untouched.
pub fn init(path: Option<PathBuf>) -> AssistantResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    Config::default_config().save(&config_path)?;
    println!("Configuration created at: {}", config_path.display());
    Ok(())
}

/// Runs the contact bot on stdin/stdout.
pub fn bot(config: &Config) -> AssistantResult<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut session = Session::new(config.bot.clone());
    session.run(stdin.lock(), stdout.lock())?;

    tracing::debug!(contacts = session.contacts().len(), "session finished");
    Ok(())
}

/// Prints the Fibonacci number for every index, sharing one cache.
pub fn fib(indices: &[i64]) -> AssistantResult<()> {
    let mut cache = FibonacciCache::new();
    let mut stdout = std::io::stdout().lock();

    for &n in indices {
        let value = cache.evaluate(n)?;
        writeln!(stdout, "{}", value)?;
    }

    let stats = cache.stats();
    tracing::debug!(
        size = stats.size,
        hits = stats.hits,
        misses = stats.misses,
        hit_rate = stats.hit_rate(),
        "fibonacci cache"
    );
    Ok(())
}

/// Prints the per-level table and, when a level is given, its lines.
pub fn logs(file: &Path, level: Option<&str>, json: bool, config: &Config) -> AssistantResult<()> {
    let entries = load_logs(file)?;
    let counts = count_logs_by_level(&entries);
    let level = level
        .or(config.logs.default_level.as_deref())
        .map(str::to_uppercase);

    let mut stdout = std::io::stdout().lock();

    if json {
        let details = level
            .as_deref()
            .map(|l| filter_logs_by_level(&entries, l));
        let value = serde_json::json!({
            "counts": counts,
            "level": level,
            "entries": details,
        });
        writeln!(stdout, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    write!(stdout, "{}", render_counts(&counts))?;
    if let Some(level) = level {
        let filtered = filter_logs_by_level(&entries, &level);
        write!(stdout, "{}", render_details(&filtered, &level))?;
    }
    Ok(())
}

/// Prints the sum of the real numbers in the given text or file.
pub fn profit(text: Option<String>, file: Option<PathBuf>) -> AssistantResult<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        (None, None) => {
            return Err(AssistantError::other(
                "Give me a text or a file to sum (see 'assistant profit --help')",
            ))
        }
    };

    let total = sum_profit(&text, generate_numbers)?;
    println!("Total income: {}", total);
    Ok(())
}

/// Shows version.
pub fn version() {
    println!("assistant v{}", env!("CARGO_PKG_VERSION"));
}
