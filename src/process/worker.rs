use crate::config::BenchConfig;
use crate::error::CountError;
use crate::parallel::ParallelCountEngine;
use crate::utils::read_input_or_empty;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Message a worker process sends to its parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerReport {
    /// Position of the file in the parent's input list
    pub file_index: usize,
    pub path: PathBuf,
    pub distinct_words: usize,
}

impl WorkerReport {
    /// Single-line wire form, newline terminated
    pub fn encode(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }

    pub fn decode(message: &str) -> serde_json::Result<Self> {
        serde_json::from_str(message.trim())
    }
}

/// Body of one worker process
///
/// Counts `path` with the thread pool, writes the top words to `display`
/// and the tagged report to `channel`. An unreadable file is counted as empty.
pub fn run_worker<C, D>(
    index: usize,
    path: &Path,
    config: &BenchConfig,
    channel: &mut C,
    display: &mut D,
) -> Result<WorkerReport, CountError>
where
    C: Write,
    D: Write,
{
    let engine = ParallelCountEngine::new(config.workers, config.partition_policy);
    let counts = engine.count(&read_input_or_empty(path))?;

    let report = WorkerReport {
        file_index: index,
        path: path.to_path_buf(),
        distinct_words: counts.distinct(),
    };

    let message = report.encode().map_err(|e| CountError::Protocol {
        index,
        reason: e.to_string(),
    })?;
    channel
        .write_all(message.as_bytes())
        .and_then(|()| channel.flush())
        .map_err(|source| CountError::ChannelIo { index, source })?;

    // Display output is best effort and never reaches the parent's pipe
    let _ = writeln!(display, "\n  Most frequent words in file {}:", path.display());
    for (word, count) in counts.top_n(config.top_n) {
        let _ = writeln!(display, "    {word:<15}: {count}");
    }
    let _ = display.flush();

    Ok(report)
}
