//! Data models for load testing
//!
//! Defines load case configuration, invocables, and results.

mod case;
mod config;
mod result;

pub use case::{Invocable, InvocableFn, LoadCase};
pub use config::LoadConfig;
pub use result::LoadResult;
