//! Single-threaded vs thread-pool comparison
//!
//! Runs both strategies over the same input, times each one and checks that
//! they agree. A mismatch is reported, never raised: with
//! [`PartitionPolicy::Truncating`](crate::parallel::PartitionPolicy) it is the
//! expected symptom of a word split on a partition boundary or a dropped tail.

use crate::count::{CountMap, count_buffer};
use crate::error::CountError;
use crate::parallel::ParallelCountEngine;
use crate::utils::{Timed, read_input_or_empty, timed};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Results and timings of both strategies over one input
#[derive(Debug)]
pub struct Comparison {
    pub single: Timed<CountMap>,
    pub parallel: Timed<CountMap>,
}

impl Comparison {
    /// Both strategies produced the same words with the same counts
    pub fn matches(&self) -> bool {
        self.single.value == self.parallel.value
    }

    /// Number of words whose counts disagree
    pub fn divergence(&self) -> usize {
        self.single.value.divergence(&self.parallel.value)
    }

    /// Single-threaded time divided by parallel time
    pub fn speedup(&self) -> Option<f64> {
        if self.parallel.elapsed == Duration::ZERO {
            return None;
        }
        Some(self.single.elapsed.as_secs_f64() / self.parallel.elapsed.as_secs_f64())
    }
}

/// Comparison for a named input file
#[derive(Debug)]
pub struct FileComparison {
    pub path: PathBuf,
    pub comparison: Comparison,
}

/// Runs both counting strategies side by side
#[derive(Debug, Clone, Copy)]
pub struct ComparisonHarness {
    engine: ParallelCountEngine,
}

impl ComparisonHarness {
    pub fn new(engine: ParallelCountEngine) -> Self {
        Self { engine }
    }

    /// Compare both strategies over an in-memory buffer
    pub fn compare(&self, buffer: &[u8]) -> Result<Comparison, CountError> {
        let single = timed(|| count_buffer(buffer));
        let parallel = timed(|| self.engine.count(buffer)).transpose()?;
        Ok(Comparison { single, parallel })
    }

    /// Compare both strategies over a file
    ///
    /// Each timed section includes reading the file, as both strategies would
    /// in a standalone run. An unreadable file yields two empty results.
    pub fn compare_file(&self, path: &Path) -> Result<FileComparison, CountError> {
        tracing::info!("Comparing strategies on {}", path.display());

        let single = timed(|| count_buffer(&read_input_or_empty(path)));
        let parallel = timed(|| self.engine.count(&read_input_or_empty(path))).transpose()?;

        Ok(FileComparison {
            path: path.to_path_buf(),
            comparison: Comparison { single, parallel },
        })
    }

    /// Compare every file in order, stopping at the first fatal error
    pub fn compare_all(&self, files: &[PathBuf]) -> Result<Vec<FileComparison>, CountError> {
        files.iter().map(|path| self.compare_file(path)).collect()
    }
}
