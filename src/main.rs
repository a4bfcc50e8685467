use clap::Parser;
use tavault::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
