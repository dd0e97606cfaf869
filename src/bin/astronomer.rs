use std::process::ExitCode;

use clap::Parser;

use aoc2023::cli::{self, InputArgs};
use aoc2023::galaxy::Universe;
use aoc2023::logging;

/// Sum the distances between every pair of galaxies in an expanding image.
#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    common: InputArgs,

    /// Extra rows or columns each empty one expands by.
    #[arg(short, long, default_value_t = 1)]
    expansion: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.common.debug);

    cli::finish(
        Universe::read_from_file(&args.common.input)
            .map(|universe| universe.distance_sum(args.expansion)),
    )
}
