//! textmorph CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, delegate to
//! the runner, and exit non-zero on failure. For programmatic use, prefer
//! the library API (`textmorph::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
