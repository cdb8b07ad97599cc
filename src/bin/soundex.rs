//! soundex - American Soundex phonetic encoding
//!
//! Command-line front end over the libsoundex encoder.

use clap::Parser;
use colored::Colorize;
use std::process;

use libsoundex::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
