//! iconscale CLI entrypoint.
//!
//! Parses args, merges them over an optional config file and runs the batch.
//! For programmatic use, prefer the library API (`iconscale::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
