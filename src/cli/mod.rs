//! Command Line Interface (CLI) layer for salicrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the single-image and batch
//! binaries. It wires user-provided options to the underlying library
//! functionality exposed via `crate::api`.
//!
//! If you are embedding salicrop into another application, prefer using
//! the high-level `api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{BatchArgs, CropArgs};
pub use runner::{run_batch, run_single};
