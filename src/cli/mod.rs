//! CLI argument parsing
//!
//! Defines the command-line interface using clap.

use clap::{Parser, Subcommand};

/// Concurrent load testing harness for Rust functions
#[derive(Parser, Debug)]
#[command(name = "rload")]
#[command(version)]
#[command(about = "Run functions repeatedly under controlled concurrency")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single synthetic workload through the engine
    Run(RunArgs),

    /// Run the built-in demo suite
    Suite(SuiteArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Case name used in the report
    #[arg(short, long, default_value = "synthetic::sleep")]
    pub name: String,

    /// Total iteration budget
    #[arg(short, long, default_value = "100")]
    pub iterations: u64,

    /// Number of parallel workers
    #[arg(short, long, default_value = "4")]
    pub threads: u32,

    /// Wall-clock budget in milliseconds (0 = unbounded)
    #[arg(long, default_value = "0")]
    pub timeout_ms: u64,

    /// Simulated work per invocation in milliseconds
    #[arg(short, long, default_value = "10")]
    pub work_ms: u64,

    /// Fail the invocable at this global iteration (for demoing failures)
    #[arg(long)]
    pub fail_at: Option<u64>,

    /// Completion policy: first (historical) or all
    #[arg(long, default_value = "first")]
    pub policy: String,

    /// Output format (table, json, json-pretty, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Arguments for the suite command
#[derive(Parser, Debug)]
pub struct SuiteArgs {
    /// Output format (table, json, json-pretty, csv)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_defaults() {
        let args = Args::try_parse_from(["rload", "run"]).unwrap();
        match args.command {
            Command::Run(run) => {
                assert_eq!(run.iterations, 100);
                assert_eq!(run.threads, 4);
                assert_eq!(run.timeout_ms, 0);
                assert_eq!(run.policy, "first");
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_run_args_parse() {
        let args = Args::try_parse_from([
            "rload", "run", "-i", "50", "-t", "2", "--timeout-ms", "750", "--fail-at", "10",
        ])
        .unwrap();
        match args.command {
            Command::Run(run) => {
                assert_eq!(run.iterations, 50);
                assert_eq!(run.threads, 2);
                assert_eq!(run.timeout_ms, 750);
                assert_eq!(run.fail_at, Some(10));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_suite_command() {
        let args = Args::try_parse_from(["rload", "suite", "--format", "json"]).unwrap();
        match args.command {
            Command::Suite(suite) => assert_eq!(suite.format, "json"),
            _ => panic!("expected suite command"),
        }
    }
}
