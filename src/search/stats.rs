//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited by `max_value` / `min_value`.
    pub nodes: u64,

    /// Visited boards that were terminal.
    pub terminal_nodes: u64,

    /// Boards answered from the value cache.
    pub cache_hits: u64,

    /// Wall time of the last root search (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add the node counters of another search. Time is left alone.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.terminal_nodes += other.terminal_nodes;
        self.cache_hits += other.cache_hits;
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
