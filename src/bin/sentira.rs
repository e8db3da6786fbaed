//! Sentira CLI binary.

use std::process;

use clap::Parser;

use sentira::cli::args::SentiraArgs;
use sentira::cli::commands::execute_command;

fn main() {
    let args = SentiraArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
