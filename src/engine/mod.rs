//! Concurrent execution engine
//!
//! Partitions an iteration budget across a fixed-size worker pool, races
//! completion under an optional wall-clock timeout, and measures elapsed
//! time for one load case at a time.

mod worker;

pub use worker::Worker;

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task;
use tracing::debug;

use crate::error::RunError;
use crate::models::{Invocable, LoadConfig, LoadResult};

/// How many workers the engine waits for before declaring success
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Wait for the first worker to finish its share, then report.
    ///
    /// Slower workers keep running on the blocking pool after the result is
    /// produced, and a failure in a not-yet-awaited worker may never
    /// surface. This is the historical contract and the default.
    #[default]
    FirstWorker,
    /// Wait for every worker; fail if any share failed.
    AllWorkers,
}

/// Split an iteration budget into per-worker shares.
///
/// Workers `0..threads-1` each get `iterations / threads`; the last worker
/// additionally absorbs the remainder. Shares of zero are legal when the
/// budget is smaller than the pool.
pub fn partition(iterations: u64, threads: u32) -> Vec<u64> {
    let threads = threads.max(1) as usize;
    let base = iterations / threads as u64;
    let mut shares = vec![base; threads];
    if let Some(last) = shares.last_mut() {
        *last += iterations % threads as u64;
    }
    shares
}

/// Executes one load case under its configured concurrency
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecutionEngine {
    completion: CompletionPolicy,
}

impl ExecutionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the completion policy
    pub fn with_completion(mut self, completion: CompletionPolicy) -> Self {
        self.completion = completion;
        self
    }

    /// Run `invocable` under `config`, returning the timing result.
    ///
    /// Validation happens before any worker is spawned. Timeout does not
    /// cancel in-flight workers; they run their shares to completion on the
    /// blocking pool after the error is returned.
    pub async fn execute(
        &self,
        name: &str,
        invocable: Invocable,
        config: &LoadConfig,
    ) -> Result<LoadResult, RunError> {
        config.validate(name)?;

        let shares = partition(config.iterations, config.threads);
        debug!("executing '{}' with shares {:?}", name, shares);

        let (tx, mut rx) = mpsc::channel::<anyhow::Result<()>>(shares.len());
        let started = Instant::now();

        for (index, share) in shares.iter().copied().enumerate() {
            let invocable = invocable.clone();
            let tx = tx.clone();
            task::spawn_blocking(move || {
                let outcome = Worker::new(index, share).run(invocable.as_ref());
                let _ = tx.blocking_send(outcome);
            });
        }
        drop(tx);

        match self.completion {
            CompletionPolicy::FirstWorker => {
                let first = self
                    .bounded_recv(name, config, started, &mut rx)
                    .await?;
                first.map_err(|source| RunError::Invocation {
                    name: name.to_string(),
                    source,
                })?;
            }
            CompletionPolicy::AllWorkers => {
                for _ in 0..shares.len() {
                    let outcome = self
                        .bounded_recv(name, config, started, &mut rx)
                        .await?;
                    outcome.map_err(|source| RunError::Invocation {
                        name: name.to_string(),
                        source,
                    })?;
                }
            }
        }

        // The wait may return just under the deadline and still leave the
        // measured time over it.
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if config.timeout_ms > 0 && elapsed_ms > config.timeout_ms {
            return Err(RunError::Timeout {
                name: name.to_string(),
                timeout_ms: config.timeout_ms,
            });
        }

        Ok(LoadResult::new(name, config.iterations, elapsed_ms))
    }

    /// Receive one worker outcome, bounded by the remaining budget.
    ///
    /// A closed channel means every remaining worker died without reporting
    /// (a panicking invocable); surfaced as an invocation failure.
    async fn bounded_recv(
        &self,
        name: &str,
        config: &LoadConfig,
        started: Instant,
        rx: &mut mpsc::Receiver<anyhow::Result<()>>,
    ) -> Result<anyhow::Result<()>, RunError> {
        let received = if config.timeout_ms == 0 {
            rx.recv().await
        } else {
            let budget = Duration::from_millis(config.timeout_ms);
            let remaining = budget.saturating_sub(started.elapsed());
            tokio::time::timeout(remaining, rx.recv())
                .await
                .map_err(|_| RunError::Timeout {
                    name: name.to_string(),
                    timeout_ms: config.timeout_ms,
                })?
        };

        received.ok_or_else(|| RunError::Invocation {
            name: name.to_string(),
            source: anyhow::anyhow!("worker terminated without reporting a result"),
        })
    }
}
