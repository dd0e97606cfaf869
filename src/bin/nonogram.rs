use std::process::ExitCode;

use clap::Parser;

use aoc2023::cli::{self, InputArgs};
use aoc2023::{logging, springs};

/// Count the spring arrangements that fit each condition record.
#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    common: InputArgs,

    /// Number of times to repeat each record.
    #[arg(short, long, default_value_t = 1)]
    folds: usize,

    /// Enumerate every candidate instead of counting. Exponential in the unknowns.
    #[arg(long)]
    brute: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.common.debug);

    cli::finish(springs::read_records(&args.common.input).map(|records| {
        records
            .iter()
            .map(|record| record.unfold(args.folds))
            .map(|record| {
                if args.brute {
                    record.arrangements_brute()
                } else {
                    record.arrangements()
                }
            })
            .sum::<u64>()
    }))
}
