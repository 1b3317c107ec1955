//! Load workers
//!
//! A worker runs its share of the iteration budget sequentially on one
//! blocking-pool thread.

use tracing::debug;

/// One worker's slice of an engine invocation
#[derive(Clone, Copy, Debug)]
pub struct Worker {
    index: usize,
    share: u64,
}

impl Worker {
    pub fn new(index: usize, share: u64) -> Self {
        Self { index, share }
    }

    /// Invoke the body exactly `share` times, back-to-back.
    ///
    /// The share is abandoned at the first error; remaining iterations are
    /// never attempted. A zero share completes immediately.
    pub fn run(
        &self,
        invocable: &(dyn Fn() -> anyhow::Result<()> + Send + Sync),
    ) -> anyhow::Result<()> {
        debug!("worker {} starting ({} iterations)", self.index, self.share);

        for iteration in 0..self.share {
            if let Err(err) = invocable() {
                debug!(
                    "worker {} aborted at iteration {}: {}",
                    self.index, iteration, err
                );
                return Err(err);
            }
        }

        debug!("worker {} finished", self.index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_runs_share_times() {
        let count = AtomicU64::new(0);
        let worker = Worker::new(0, 7);
        let outcome = worker.run(&|| {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        assert!(outcome.is_ok());
        assert_eq!(count.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_zero_share_completes_immediately() {
        let count = AtomicU64::new(0);
        let worker = Worker::new(3, 0);
        assert!(worker
            .run(&|| {
                count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .is_ok());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_aborts_share_on_first_error() {
        let count = AtomicU64::new(0);
        let worker = Worker::new(0, 10);
        let outcome = worker.run(&|| {
            let seen = count.fetch_add(1, Ordering::SeqCst);
            if seen == 2 {
                anyhow::bail!("connection reset");
            }
            Ok(())
        });
        assert!(outcome.is_err());
        // iterations 0 and 1 succeeded, 2 failed, 3..10 never ran
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
