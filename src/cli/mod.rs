//! Command-line interface module.

mod args;
pub mod build;
mod scan;

pub use args::Cli;
