//! Error types for load test execution
//!
//! A single failure anywhere aborts the entire run; there is no per-case
//! recovery, so every variant here terminates `LoadRunner::run`.

use thiserror::Error;

/// Load run errors
#[derive(Error, Debug)]
pub enum RunError {
    /// Config bounds violated; raised before any worker starts.
    #[error("invalid load config for '{name}': {reason}")]
    Validation { name: String, reason: String },

    /// The awaited worker's invocation failed.
    #[error("load case '{name}' failed: {source}")]
    Invocation {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// Measured elapsed time (or the bounded wait itself) exceeded the
    /// configured non-zero timeout.
    #[error("timeout in {name}: exceeded {timeout_ms}ms")]
    Timeout { name: String, timeout_ms: u64 },

    /// Case enumeration failed.
    #[error("discovery failed: {0}")]
    Discovery(#[source] anyhow::Error),

    /// An identifier could not be resolved to any load case.
    #[error("could not resolve '{name}': {source}")]
    Resolution {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl RunError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RunError::Timeout { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RunError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let err = RunError::Timeout {
            name: "cases::checkout".to_string(),
            timeout_ms: 500,
        };
        assert_eq!(err.to_string(), "timeout in cases::checkout: exceeded 500ms");
        assert!(err.is_timeout());
    }

    #[test]
    fn test_validation_message() {
        let err = RunError::Validation {
            name: "cases::checkout".to_string(),
            reason: "thread count cannot be lesser than 1, given: 0".to_string(),
        };
        assert!(err.to_string().contains("cases::checkout"));
        assert!(err.is_validation());
        assert!(!err.is_timeout());
    }
}
