use std::process::ExitCode;

use clap::Parser;

use aoc2023::cli::{self, InputArgs};
use aoc2023::{logging, mirror};

/// Summarize the lines of reflection across every pattern.
#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    common: InputArgs,

    /// Exact number of differing cells a line of reflection must have.
    #[arg(short = 'd', long, default_value_t = 0)]
    differences: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.common.debug);

    cli::finish(
        mirror::read_patterns(&args.common.input)
            .map(|patterns| mirror::summarize(&patterns, args.differences)),
    )
}
