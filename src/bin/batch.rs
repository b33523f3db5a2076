//! salicrop-batch CLI entrypoint.
//!
//! Scans a folder for JPG images, crops each to its salient region, and
//! writes a sibling `.webp` per source. Per-file failures are logged and
//! never abort the rest of the batch.

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = salicrop::cli::BatchArgs::parse();
    salicrop::cli::run_batch(args)
}
