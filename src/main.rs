use clap::Parser;
use cfglookup::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
