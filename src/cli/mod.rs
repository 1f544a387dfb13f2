//! Command Line Interface (CLI) layer for iconscale.
//!
//! Defines argument parsing (`args`), error types (`errors`) and the
//! orchestration logic (`runner`) that merges flags over an optional JSON
//! config and hands the result to `iconscale::process_directory`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
