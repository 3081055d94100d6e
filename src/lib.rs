//! # wordbench - word-frequency counting under three execution strategies
//!
//! Counts lowercase ASCII words over a fixed set of text files and compares:
//!
//! - **Single-threaded**: one pass of [`count::tokenize`] + [`count::count_tokens`]
//! - **Thread pool**: [`parallel::ParallelCountEngine`] splits each buffer into
//!   per-worker partitions and merges the per-worker counts
//! - **Worker processes**: [`process::MultiProcessDriver`] counts each file in
//!   its own process, each running the thread pool internally
//!
//! [`harness::ComparisonHarness`] times the first two strategies against each
//! other and checks that they agree.
//!
//! ## Quick Start
//!
//! ```bash
//! # Benchmark the Calgary corpus under ./calgary
//! wordbench
//!
//! # Same, from another directory, with info logs
//! wordbench -C /data -v
//! ```

pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod harness;
pub mod parallel;
pub mod process;
pub mod utils;

pub use cli::{Cli, Output};
pub use config::BenchConfig;
pub use count::CountMap;
pub use error::CountError;

/// Result type alias for wordbench operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
