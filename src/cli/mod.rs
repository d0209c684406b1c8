//! Command-line interface.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::config::DEFAULT_CONFIG_FILE;

/// Assistant - small command-line helpers.
#[derive(Parser, Debug)]
#[command(name = "assistant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Verbose mode.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode.
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Writes a default configuration file.
    Init {
        /// Target directory (default: current directory).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Starts the interactive contact bot.
    Bot,

    /// Prints Fibonacci numbers.
    Fib {
        /// Indices to evaluate.
        #[arg(required = true, allow_negative_numbers = true)]
        n: Vec<i64>,
    },

    /// Counts log lines per level and shows the lines of one level.
    Logs {
        /// Log file to analyze.
        file: PathBuf,

        /// Level whose lines are listed (case-insensitive).
        level: Option<String>,

        /// Prints the counts as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Sums the real numbers found in a text.
    Profit {
        /// Text to scan.
        text: Option<String>,

        /// Reads the text from a file instead.
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Shows version.
    Version,
}
