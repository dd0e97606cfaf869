use std::process::ExitCode;

use clap::Parser;

use aoc2023::cli::{self, InputArgs};
use aoc2023::{lens, logging};

/// HASH the initialization sequence, or run it through the lens boxes.
#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    common: InputArgs,

    /// Report the focusing power of the boxes instead of the hash sum.
    #[arg(long)]
    focus: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.common.debug);

    cli::finish(lens::read_steps(&args.common.input).map(|steps| {
        if args.focus {
            lens::focusing_power(&steps)
        } else {
            lens::hash_sum(&steps)
        }
    }))
}
