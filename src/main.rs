//! CLI entry point for jigsaw reconstruction

use clap::Parser;
use jigsaw::io::cli::{Cli, FileProcessor};
use jigsaw::io::log::init_logger;

fn main() -> jigsaw::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);
    let mut processor = FileProcessor::new(cli)?;
    processor.process()?;
    Ok(())
}
