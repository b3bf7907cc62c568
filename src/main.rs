use clap::Parser;
use dirsort::cli::{Cli, run};
use dirsort::output::OutputFormatter;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        OutputFormatter::error(&e);
        process::exit(1);
    }
}
