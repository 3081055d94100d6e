//! Benchmark configuration
//!
//! All values are compiled in. The run reads no configuration files,
//! environment variables or flags that change the workload; the struct exists
//! so the engine, harness and process driver receive their parameters
//! explicitly instead of through globals.

use crate::parallel::PartitionPolicy;
use anyhow::Result;
use std::path::PathBuf;

/// Number of counting threads per file
pub const DEFAULT_WORKERS: usize = 4;

/// Number of most frequent words shown per file
pub const DEFAULT_TOP_N: usize = 10;

/// Calgary corpus files benchmarked by default, relative to the working directory
pub const DEFAULT_FILES: [&str; 7] = [
    "calgary/bib",
    "calgary/paper1",
    "calgary/paper2",
    "calgary/progc",
    "calgary/progl",
    "calgary/progp",
    "calgary/trans",
];

/// Parameters shared by every execution strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Counting threads per file
    pub workers: usize,

    /// Words listed in each per-file report
    pub top_n: usize,

    /// Boundary placement for the thread pool
    pub partition_policy: PartitionPolicy,

    /// Input files, in report order
    pub files: Vec<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            top_n: DEFAULT_TOP_N,
            partition_policy: PartitionPolicy::Truncating,
            files: DEFAULT_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl BenchConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            anyhow::bail!("Worker count must be at least 1");
        }

        if self.top_n == 0 {
            anyhow::bail!("Top-N size must be at least 1");
        }

        if self.files.is_empty() {
            anyhow::bail!("At least one input file must be specified");
        }

        let cores = num_cpus::get();
        if self.workers > cores {
            tracing::info!(
                "{} counting threads requested on {} available cores",
                self.workers,
                cores
            );
        }

        Ok(())
    }

    /// Input file at `index`, if any
    pub fn file(&self, index: usize) -> Option<&PathBuf> {
        self.files.get(index)
    }
}

#[cfg(test)]
mod tests;
