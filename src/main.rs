//! rload - concurrent load testing CLI
//!
//! Drives synthetic workloads through the load engine.
//!
//! ## Usage
//!
//! ```bash
//! # 100 iterations split across 4 workers, 10ms of work each
//! rload run --iterations 100 --threads 4 --work-ms 10
//!
//! # Enforce a wall-clock budget
//! rload run --iterations 100 --threads 4 --timeout-ms 500
//!
//! # Wait for every worker instead of the first completer
//! rload run --policy all
//!
//! # Built-in three-case demo suite
//! rload suite --format json
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rload::cli::{Args, Command, RunArgs, SuiteArgs};
use rload::{
    CompletionPolicy, ExecutionEngine, LoadConfig, LoadRunner, OutputFormat, Registry,
    ReportFormatter,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    FmtSubscriber::builder()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .compact()
        .init();

    match args.command {
        Command::Run(run_args) => run_workload(run_args).await?,
        Command::Suite(suite_args) => run_suite(suite_args).await?,
    }

    Ok(())
}

async fn run_workload(args: RunArgs) -> Result<()> {
    let policy = match args.policy.to_lowercase().as_str() {
        "first" => CompletionPolicy::FirstWorker,
        "all" => CompletionPolicy::AllWorkers,
        other => anyhow::bail!("unknown completion policy: {other}. Use 'first' or 'all'"),
    };

    let format = OutputFormat::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("unknown output format: {}", args.format))?;

    let config = LoadConfig::new(args.iterations)
        .with_threads(args.threads)
        .with_timeout_ms(args.timeout_ms);

    info!(
        "running '{}': {} iterations on {} workers ({}ms work/call)",
        args.name, args.iterations, args.threads, args.work_ms
    );

    let work = Duration::from_millis(args.work_ms);
    let fail_at = args.fail_at;
    let invoked = Arc::new(AtomicU64::new(0));

    let mut registry = Registry::new();
    registry.register(&args.name, config, move || {
        let iteration = invoked.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(work);
        if Some(iteration) == fail_at {
            anyhow::bail!("synthetic failure at iteration {iteration}");
        }
        Ok(())
    });

    let runner = LoadRunner::new()
        .with_engine(ExecutionEngine::new().with_completion(policy))
        .with_reporter(ReportFormatter::new(format));

    let report = runner.run(&registry).await?;
    println!("{report}");

    Ok(())
}

/// Three-case demo suite: two single-worker cases and one five-worker case.
async fn run_suite(args: SuiteArgs) -> Result<()> {
    let format = OutputFormat::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("unknown output format: {}", args.format))?;

    let mut registry = Registry::new();
    registry
        .register("suite::short_sleep", LoadConfig::new(10), || {
            std::thread::sleep(Duration::from_millis(10));
            Ok(())
        })
        .register("suite::long_sleep", LoadConfig::new(10), || {
            std::thread::sleep(Duration::from_millis(30));
            Ok(())
        })
        .register(
            "suite::parallel_sleep",
            LoadConfig::new(100).with_threads(5),
            || {
                std::thread::sleep(Duration::from_millis(20));
                Ok(())
            },
        );

    let runner = LoadRunner::new().with_reporter(ReportFormatter::new(format));
    let report = runner.run(&registry).await?;
    println!("{report}");

    Ok(())
}
