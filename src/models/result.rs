//! Load execution results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timing result of one successful engine invocation
///
/// `iterations` is the requested budget, not proof that every worker's
/// share fully completed; under the first-completer policy slower workers
/// may still be running when the result is produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadResult {
    pub name: String,
    pub iterations: u64,
    pub elapsed_ms: u64,
}

impl LoadResult {
    pub fn new(name: impl Into<String>, iterations: u64, elapsed_ms: u64) -> Self {
        Self {
            name: name.into(),
            iterations,
            elapsed_ms,
        }
    }

    /// Requested iterations per second of wall-clock time
    pub fn throughput(&self) -> f64 {
        if self.elapsed_ms == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.elapsed_ms as f64 / 1000.0)
        }
    }
}

impl fmt::Display for LoadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} iterations, {}ms]",
            self.name, self.iterations, self.elapsed_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let result = LoadResult::new("cases::login", 10, 1000);
        assert_eq!(result.to_string(), "cases::login [10 iterations, 1000ms]");
    }

    #[test]
    fn test_throughput() {
        let result = LoadResult::new("cases::login", 100, 4000);
        assert!((result.throughput() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_throughput_zero_elapsed() {
        let result = LoadResult::new("cases::login", 100, 0);
        assert_eq!(result.throughput(), 0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let result = LoadResult::new("cases::login", 10, 250);
        let json = serde_json::to_string(&result).unwrap();
        let back: LoadResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
