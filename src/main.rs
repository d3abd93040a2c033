//! CLI entry point for the instance generator sweep harness

use clap::Parser;
use sweepbench::io::cli::{Cli, SweepProcessor};
use sweepbench::io::logging;

fn main() -> sweepbench::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);
    let mut processor = SweepProcessor::new(cli);
    processor.process()
}
