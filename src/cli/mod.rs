//! Command Line Interface (CLI) layer for textmorph.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for processing a single input
//! file. It wires user-provided flags to the underlying library
//! functionality exposed via `textmorph::api`.
//!
//! If you are embedding textmorph into another application, prefer using
//! the high-level `textmorph::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
