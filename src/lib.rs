//! Solutions to Advent of Code 2023, days 11 through 15.
//!
//! Each puzzle is its own binary under `src/bin`; this crate holds the solvers
//! and the file reading, flag parsing and logging they share.

pub mod cli;
pub mod error;
pub mod galaxy;
pub mod grid;
pub mod input;
pub mod lens;
pub mod logging;
pub mod mirror;
pub mod platform;
pub mod springs;

pub use error::{Error, Result};
