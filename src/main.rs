use anyhow::Result;
use clap::Parser;
use wordbench::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
