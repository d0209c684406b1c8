//! Memoized Fibonacci evaluator.

use std::collections::HashMap;

use crate::{AssistantError, AssistantResult};

/// Largest index whose Fibonacci number fits in a `u128`.
pub const MAX_INDEX: i64 = 186;

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached indices.
    pub size: usize,

    /// Lookups answered from the cache.
    pub hits: u64,

    /// Lookups that had to compute a value.
    pub misses: u64,
}

impl CacheStats {
    /// Computes the hit rate.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Fibonacci evaluator owning its memo table.
///
/// Each index is computed at most once per instance; cached values are
/// never evicted. Base cases (`n <= 1`) are answered directly and do not
/// touch the cache.
#[derive(Debug, Default)]
pub struct FibonacciCache {
    cache: HashMap<i64, u128>,
    hits: u64,
    misses: u64,
}

impl FibonacciCache {
    /// Creates an evaluator with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the Fibonacci number at `n`.
    ///
    /// Negative indices collapse to the base case and yield 0. Indices above
    /// [`MAX_INDEX`] are rejected before any recursion happens.
    pub fn evaluate(&mut self, n: i64) -> AssistantResult<u128> {
        if n <= 0 {
            return Ok(0);
        }
        if n == 1 {
            return Ok(1);
        }
        if n > MAX_INDEX {
            return Err(AssistantError::Overflow(n));
        }
        if let Some(&value) = self.cache.get(&n) {
            self.hits += 1;
            return Ok(value);
        }
        self.misses += 1;

        let value = self
            .evaluate(n - 1)?
            .checked_add(self.evaluate(n - 2)?)
            .ok_or(AssistantError::Overflow(n))?;

        self.cache.insert(n, value);
        tracing::trace!(n, value = %value, "fibonacci cached");
        Ok(value)
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Number of cached indices.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops every cached value and resets the counters.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
