//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default number of refinement passes.
pub const DEFAULT_MAX_DEPTH: usize = 3;
/// Capacity of the thought memory.
pub const DEFAULT_THOUGHT_CAPACITY: usize = 100;
/// Capacity of the reflection, meta-analysis and abstract logs.
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// Tunables for a `Noesis` engine, with builder-style setters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Refinement passes per processed thought.
    pub max_depth: usize,
    /// Capacity of the thought memory log.
    pub thought_capacity: usize,
    /// Capacity of each collaborator log.
    pub log_capacity: usize,
    /// Flush a snapshot after every mutating call (write-through). Turning
    /// this off keeps the engine memory-only until an explicit flush.
    pub flush_on_process: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            thought_capacity: DEFAULT_THOUGHT_CAPACITY,
            log_capacity: DEFAULT_LOG_CAPACITY,
            flush_on_process: true,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_thought_capacity(mut self, capacity: usize) -> Self {
        self.thought_capacity = capacity;
        self
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    pub fn with_flush_on_process(mut self, flush: bool) -> Self {
        self.flush_on_process = flush;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.thought_capacity, 100);
        assert_eq!(config.log_capacity, 50);
        assert!(config.flush_on_process);
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new()
            .with_max_depth(5)
            .with_thought_capacity(10)
            .with_log_capacity(4)
            .with_flush_on_process(false);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.thought_capacity, 10);
        assert_eq!(config.log_capacity, 4);
        assert!(!config.flush_on_process);
    }
}
