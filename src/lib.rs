//! # Assistant
//!
//! Small, independent command-line helpers.
//!
//! ## Modules
//!
//! - [`bot`] - Interactive contact bot with command dispatch
//! - [`cache`] - Memoized Fibonacci evaluator
//! - [`logs`] - Log file counter and filter
//! - [`profit`] - Summation of real numbers found in text
//! - [`cli`] - Command-line interface
//! - [`types`] - Shared types

pub mod bot;
pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod logs;
pub mod profit;
pub mod types;

pub use types::config::Config;
pub use types::errors::{AssistantError, AssistantResult};
