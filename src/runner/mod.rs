//! Load run orchestration
//!
//! Drives the execution engine once per discovered case, strictly in
//! enumeration order, and renders the report only when every case
//! succeeded. There is no per-case isolation: the first failure aborts the
//! run and no partial report is ever produced.

use tracing::{error, info};

use crate::discovery::CaseSource;
use crate::engine::ExecutionEngine;
use crate::error::RunError;
use crate::models::LoadResult;
use crate::output::{ReportFormatter, Reporter};

/// Sequential all-or-nothing load runner
pub struct LoadRunner {
    engine: ExecutionEngine,
    reporter: Box<dyn Reporter + Send + Sync>,
}

impl Default for LoadRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadRunner {
    pub fn new() -> Self {
        Self {
            engine: ExecutionEngine::new(),
            reporter: Box::new(ReportFormatter::default()),
        }
    }

    /// Replace the execution engine
    pub fn with_engine(mut self, engine: ExecutionEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the reporter
    pub fn with_reporter(mut self, reporter: impl Reporter + Send + Sync + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Execute every case the source yields and return the rendered report.
    ///
    /// Case N+1 never starts before case N's engine invocation returned.
    pub async fn run(&self, source: &dyn CaseSource) -> Result<String, RunError> {
        let results = self.run_cases(source).await?;
        Ok(self.reporter.format(&results))
    }

    /// Like [`run`], returning the raw results instead of a rendering
    ///
    /// [`run`]: LoadRunner::run
    pub async fn run_cases(&self, source: &dyn CaseSource) -> Result<Vec<LoadResult>, RunError> {
        let cases = source.cases()?;
        info!("running {} load cases", cases.len());

        let mut results = Vec::with_capacity(cases.len());
        for case in cases {
            let result = self
                .engine
                .execute(&case.name, case.invocable.clone(), &case.config)
                .await
                .map_err(|err| {
                    error!("load case '{}' aborted the run: {}", case.name, err);
                    err
                })?;

            info!("  {}", result);
            results.push(result);
        }

        Ok(results)
    }
}
