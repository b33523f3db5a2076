//! salicrop CLI entrypoint (single-image tool).
//!
//! Thin wrapper over the `cli` module: parse args, run the pipeline once,
//! and exit with appropriate status. For programmatic use, prefer the
//! library API (`salicrop::api`).

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = salicrop::cli::CropArgs::parse();
    salicrop::cli::run_single(args)
}
