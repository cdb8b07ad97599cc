//! CLI interface for the soundex binary
//!
//! Provides command-line encoding, comparison, and a digit-class reference.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::execute;
