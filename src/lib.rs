//! rload - concurrent load testing for Rust functions
//!
//! Executes registered functions repeatedly under controlled concurrency,
//! enforcing an iteration budget and an optional wall-clock timeout, and
//! renders a timing report per case.
//!
//! ## Usage
//!
//! ```no_run
//! use rload::{LoadConfig, LoadRunner, Registry};
//!
//! # async fn demo() -> Result<(), rload::RunError> {
//! let mut registry = Registry::new();
//! registry.register(
//!     "cases::parse_order",
//!     LoadConfig::new(1_000).with_threads(8).with_timeout_ms(2_000),
//!     || {
//!         // the body under load
//!         Ok(())
//!     },
//! );
//!
//! let report = LoadRunner::new().run(&registry).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! The run is all-or-nothing: the first validation, invocation, or timeout
//! failure aborts it and no partial report is produced.

pub mod cli;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod models;
pub mod output;
pub mod runner;

pub use discovery::{CaseSource, Discovery, Registry, ResolvedSource, Resolver};
pub use engine::{partition, CompletionPolicy, ExecutionEngine, Worker};
pub use error::RunError;
pub use models::{Invocable, LoadCase, LoadConfig, LoadResult};
pub use output::{OutputFormat, ReportFormatter, Reporter};
pub use runner::LoadRunner;
