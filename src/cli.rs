use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use crate::Result;

/// Flags every puzzle binary accepts.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input file for the puzzle.
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// Print the answer on stdout, or the error on stderr with a failing exit code.
pub fn finish<T: Display>(answer: Result<T>) -> ExitCode {
    match answer {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
