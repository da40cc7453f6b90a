//! CLI entry point for brand guideline extraction

use brandlens::io::cli::{BatchProcessor, Cli};
use brandlens::io::logging::init_logging;
use clap::Parser;

fn main() -> brandlens::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
