use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while counting, partitioning or coordinating workers
#[derive(Error, Debug)]
pub enum CountError {
    #[error("Failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Worker count must be at least 1")]
    NoWorkers,

    #[error("Failed to spawn {what}: {source}")]
    ResourceExhaustion {
        what: String,
        #[source]
        source: io::Error,
    },

    #[error("A counting thread panicked")]
    WorkerPanicked,

    #[error("Channel I/O failed for worker {index}: {source}")]
    ChannelIo {
        index: usize,
        #[source]
        source: io::Error,
    },

    #[error("Worker {index} sent a malformed report: {reason}")]
    Protocol { index: usize, reason: String },

    #[error("Worker {index} exited unsuccessfully ({status})")]
    WorkerExited { index: usize, status: ExitStatus },

    #[error("Failed to query resource usage: {0}")]
    ResourceQuery(#[source] io::Error),
}

impl CountError {
    /// Whether the error must abort the whole run
    ///
    /// Unreadable input files and a failed resource-usage query are reported
    /// and skipped; everything else tears the batch down.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            CountError::FileOpen { .. } | CountError::ResourceQuery(_)
        )
    }
}
