use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use aoc2023::cli::{self, InputArgs};
use aoc2023::logging;
use aoc2023::platform::{Direction, Platform};

/// Weigh the load on the north beams after tilting the platform.
#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    common: InputArgs,

    /// Run spin cycles instead of a single tilt north.
    #[arg(long)]
    cycle: bool,

    /// Number of spin cycles to run.
    #[arg(long, default_value_t = 1)]
    count: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.common.debug);

    cli::finish(
        Platform::read_from_file(&args.common.input).map(|mut platform| {
            if args.cycle {
                platform.spin_cycles(args.count);
            } else {
                platform.tilt(Direction::North);
            }
            debug!("final platform:\n{}", platform);
            platform.north_load()
        }),
    )
}
