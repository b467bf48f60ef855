// src/bin/cli.rs
use clap::Parser;
use sched_scrape::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    sched_scrape::log::init(args.verbose);
    cli::run(args)
}
