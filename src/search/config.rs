//! Minimax search configuration.

use serde::{Deserialize, Serialize};

/// Minimax search configuration.
///
/// Neither option changes the values or the moves the search returns;
/// they only trade memory or threads for time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Remember the value of every board visited, for the lifetime of the
    /// search context. Off by default: the plain search is exhaustive.
    pub memoize: bool,

    /// Evaluate the root moves on the rayon thread pool.
    /// Each root move gets its own search context.
    pub parallel_root: bool,
}

impl SearchConfig {
    /// Create the default (sequential, unmemoized) config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the value cache.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Enable or disable parallel evaluation of root moves.
    pub fn with_parallel_root(mut self, parallel_root: bool) -> Self {
        self.parallel_root = parallel_root;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(!config.memoize);
        assert!(!config.parallel_root);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::new()
            .with_memoize(true)
            .with_parallel_root(true);

        assert!(config.memoize);
        assert!(config.parallel_root);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::new().with_memoize(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
