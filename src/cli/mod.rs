//! Command-line interface for wordbench
//!
//! Running without a subcommand runs the full benchmark. The hidden `worker`
//! subcommand is the entry point of each child process started by the
//! multi-process phase.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

/// Word-frequency counting benchmark
#[derive(Parser)]
#[command(
    name = "wordbench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Word-frequency counting benchmark: single-threaded vs thread pool vs worker processes",
    long_about = None
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare strategies, then count every file in its own process
    Bench,
    /// Count one file and report to the parent process
    #[command(hide = true)]
    Worker(commands::worker::WorkerArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Change directory if specified
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        setup_logging(self.verbose, self.quiet);
        let worker_flags = self.worker_flags();

        match self.command {
            Some(Commands::Worker(args)) => commands::worker::execute(args),
            Some(Commands::Bench) | None => {
                let output = Output::new(self.verbose > 0);
                commands::bench::execute(&output, worker_flags)
            }
        }
    }

    /// Global flags forwarded to worker processes
    ///
    /// `-C` is not forwarded: children inherit the already-changed directory.
    fn worker_flags(&self) -> Vec<String> {
        let mut flags = Vec::new();
        if self.quiet {
            flags.push("--quiet".to_string());
        }
        if self.verbose > 0 {
            flags.push(format!("-{}", "v".repeat(self.verbose as usize)));
        }
        flags
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_bench() {
        let cli = Cli::try_parse_from(["wordbench"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["wordbench", "bench"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Bench)));
    }

    #[test]
    fn test_worker_flags_forwarded() {
        let cli = Cli::try_parse_from(["wordbench", "-vv", "-C", "/tmp"]).unwrap();
        assert_eq!(cli.worker_flags(), vec!["-vv".to_string()]);

        let cli = Cli::try_parse_from(["wordbench", "--quiet"]).unwrap();
        assert_eq!(cli.worker_flags(), vec!["--quiet".to_string()]);
    }

    #[test]
    fn test_parse_worker() {
        let cli =
            Cli::try_parse_from(["wordbench", "-v", "worker", "--index", "2", "calgary/paper2"])
                .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Some(Commands::Worker(args)) => {
                assert_eq!(args.index, 2);
                assert_eq!(args.path, PathBuf::from("calgary/paper2"));
            }
            _ => panic!("expected worker subcommand"),
        }
    }
}
