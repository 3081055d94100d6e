//! Process-level parallelism: one worker process per input file
//!
//! The parent re-runs its own executable with the hidden `worker` subcommand
//! once per file. Every child gets a dedicated pipe (its stdout) and writes a
//! single JSON line tagged with its file index. The parent drains exactly one
//! message per child, in spawn order, and reaps that child before moving on.
//!
//! ```text
//! parent ──spawn──▶ worker 0 ──stdout pipe──▶ {"file_index":0,...}
//!        ──spawn──▶ worker 1 ──stdout pipe──▶ {"file_index":1,...}
//!        ...
//! ```
//!
//! Each child also prints its own top words to its inherited stderr; that
//! display never travels through the pipe.

pub mod worker;

pub use worker::{WorkerReport, run_worker};

use crate::error::CountError;
use crate::utils::{Timed, timed};
use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Name of the hidden subcommand that runs one worker
pub const WORKER_SUBCOMMAND: &str = "worker";

/// Aggregate of every worker report
#[derive(Debug)]
pub struct BatchSummary {
    /// One report per input file, in input order
    pub reports: Vec<WorkerReport>,
    /// Sum of per-file distinct word counts
    pub total_distinct: usize,
}

/// Spawns one counting process per file and collects their reports
#[derive(Debug, Clone)]
pub struct MultiProcessDriver {
    program: PathBuf,
    global_args: Vec<OsString>,
}

impl MultiProcessDriver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            global_args: Vec::new(),
        }
    }

    /// Driver that re-runs the currently executing binary
    pub fn from_current_exe() -> Result<Self, CountError> {
        let program = std::env::current_exe().map_err(|source| CountError::ResourceExhaustion {
            what: "worker process (cannot locate current executable)".to_string(),
            source,
        })?;
        Ok(Self::new(program))
    }

    /// Arguments placed before the worker subcommand (e.g. verbosity flags)
    pub fn with_global_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.global_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Count every file in its own process and wait for all of them
    ///
    /// Any spawn failure, pipe error, malformed report or unsuccessful child
    /// exit aborts the batch; children already started are killed and reaped
    /// first.
    pub fn run(&self, files: &[PathBuf]) -> Result<Timed<BatchSummary>, CountError> {
        timed(|| self.run_untimed(files)).transpose()
    }

    fn run_untimed(&self, files: &[PathBuf]) -> Result<BatchSummary, CountError> {
        let mut children = Vec::with_capacity(files.len());
        for (index, path) in files.iter().enumerate() {
            match self.spawn(index, path) {
                Ok(child) => children.push(child),
                Err(e) => {
                    reap_all(children);
                    return Err(e);
                }
            }
        }
        tracing::debug!("Spawned {} worker processes", children.len());

        let mut reports = Vec::with_capacity(files.len());
        let mut pending = children.into_iter().enumerate();
        while let Some((index, child)) = pending.next() {
            match collect(index, child) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    reap_all(pending.map(|(_, child)| child));
                    return Err(e);
                }
            }
        }

        let total_distinct = reports.iter().map(|r| r.distinct_words).sum();
        Ok(BatchSummary {
            reports,
            total_distinct,
        })
    }

    fn spawn(&self, index: usize, path: &Path) -> Result<Child, CountError> {
        tracing::trace!("Spawning worker {} for {}", index, path.display());
        Command::new(&self.program)
            .args(&self.global_args)
            .arg(WORKER_SUBCOMMAND)
            .arg("--index")
            .arg(index.to_string())
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| CountError::ResourceExhaustion {
                what: format!("worker process {index}"),
                source,
            })
    }
}

/// Drain one child's pipe, wait for it and decode its report
fn collect(index: usize, mut child: Child) -> Result<WorkerReport, CountError> {
    let mut message = String::new();
    let read = match child.stdout.take() {
        Some(mut stdout) => stdout.read_to_string(&mut message).map(|_| ()),
        None => Err(std::io::Error::other("worker stdout was not captured")),
    };

    // Reap even when the read failed so no zombie is left behind
    let status = child
        .wait()
        .map_err(|source| CountError::ChannelIo { index, source })?;
    read.map_err(|source| CountError::ChannelIo { index, source })?;

    if !status.success() {
        return Err(CountError::WorkerExited { index, status });
    }

    let report = WorkerReport::decode(&message).map_err(|e| CountError::Protocol {
        index,
        reason: e.to_string(),
    })?;
    if report.file_index != index {
        return Err(CountError::Protocol {
            index,
            reason: format!("report tagged for file {}", report.file_index),
        });
    }

    tracing::debug!(
        "Worker {} reported {} distinct words for {}",
        index,
        report.distinct_words,
        report.path.display()
    );
    Ok(report)
}

fn reap_all(children: impl IntoIterator<Item = Child>) {
    for mut child in children {
        let _ = child.kill();
        let _ = child.wait();
    }
}
