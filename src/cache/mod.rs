//! Memoization for the Fibonacci calculator.
//!
//! The evaluator owns its memo table; callers construct one instance and
//! pass it around mutably for as long as cached values should live.

mod fibonacci;

pub use fibonacci::{CacheStats, FibonacciCache, MAX_INDEX};
