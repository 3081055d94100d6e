use crate::config::BenchConfig;
use crate::process::run_worker;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct WorkerArgs {
    /// Position of the file in the parent's input list
    #[arg(long)]
    pub index: usize,

    /// File to count
    pub path: PathBuf,
}

pub fn execute(args: WorkerArgs) -> Result<()> {
    let config = BenchConfig::default();
    config.validate()?;

    tracing::debug!(
        "Worker {} (pid {}) counting {}",
        args.index,
        std::process::id(),
        args.path.display()
    );

    // stdout is the pipe to the parent; the top-word display goes to stderr
    let mut channel = std::io::stdout();
    let mut display = std::io::stderr();
    run_worker(args.index, &args.path, &config, &mut channel, &mut display)
        .with_context(|| format!("Worker {} failed on {}", args.index, args.path.display()))?;

    Ok(())
}
