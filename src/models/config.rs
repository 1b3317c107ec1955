//! Load case configuration
//!
//! Per-case iteration budget, timeout, and worker pool size.

use serde::{Deserialize, Serialize};

use crate::error::RunError;

/// Configuration for one load case
///
/// Immutable once resolved; all bounds are checked by [`validate`] before
/// any worker starts.
///
/// [`validate`]: LoadConfig::validate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Total number of invocations, split across workers
    pub iterations: u64,
    /// Wall-clock budget in milliseconds; 0 means unbounded
    pub timeout_ms: u64,
    /// Number of parallel workers
    pub threads: u32,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            timeout_ms: 0,
            threads: 1,
        }
    }
}

impl LoadConfig {
    /// Create a config with an iteration budget
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }

    /// Set worker count
    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = threads;
        self
    }

    /// Set wall-clock budget in milliseconds (0 = unbounded)
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Check config bounds for the named case.
    ///
    /// Negative timeouts are unrepresentable (`u64`), so only the thread
    /// and iteration bounds can fail here.
    pub fn validate(&self, name: &str) -> Result<(), RunError> {
        if self.threads < 1 {
            return Err(RunError::Validation {
                name: name.to_string(),
                reason: format!("thread count cannot be lesser than 1, given: {}", self.threads),
            });
        }
        if self.iterations < 1 {
            return Err(RunError::Validation {
                name: name.to_string(),
                reason: format!(
                    "iteration count cannot be lesser than 1, given: {}",
                    self.iterations
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = LoadConfig::new(100).with_threads(5).with_timeout_ms(2000);
        assert_eq!(config.iterations, 100);
        assert_eq!(config.threads, 5);
        assert_eq!(config.timeout_ms, 2000);
    }

    #[test]
    fn test_default_is_valid() {
        let config = LoadConfig::default();
        assert!(config.validate("case").is_ok());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = LoadConfig::new(10).with_threads(0);
        let err = config.validate("case").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("thread count"));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = LoadConfig::new(0);
        let err = config.validate("case").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("iteration count"));
    }

    #[test]
    fn test_unbounded_timeout_is_valid() {
        let config = LoadConfig::new(1).with_timeout_ms(0);
        assert!(config.validate("case").is_ok());
    }
}
