//! Point of incidence: locating the line of reflection in each pattern.

use std::path::Path;

use tracing::debug;

use crate::grid::Grid;
use crate::input;
use crate::Result;

pub const LINE_PATTERN: &str = r"^[.#]+$";

pub struct Pattern {
    grid: Grid,
}

pub fn read_patterns(path: impl AsRef<Path>) -> Result<Vec<Pattern>> {
    let blocks = input::read_blocks(path, LINE_PATTERN)?;
    Ok(blocks.iter().map(|block| Pattern::from_lines(block)).collect())
}

/// First axis in `1..len` whose mirrored pairs differ in exactly `smudges` cells.
/// `diff(a, b)` counts differing cells between lines `a` and `b`.
fn find_axis(len: usize, smudges: usize, diff: impl Fn(usize, usize) -> usize) -> Option<usize> {
    (1..len).find(|&axis| {
        let mut total = 0;
        for k in 0..axis.min(len - axis) {
            total += diff(axis - 1 - k, axis + k);
            if total > smudges {
                return false;
            }
        }
        total == smudges
    })
}

impl Pattern {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Pattern {
        Pattern {
            grid: Grid::from_lines(lines),
        }
    }

    /// Columns left of a vertical line of reflection.
    pub fn vertical_axis(&self, smudges: usize) -> Option<usize> {
        let grid = &self.grid;
        find_axis(grid.width(), smudges, |a, b| {
            grid.column(a).zip(grid.column(b)).filter(|(x, y)| x != y).count()
        })
    }

    /// Rows above a horizontal line of reflection.
    pub fn horizontal_axis(&self, smudges: usize) -> Option<usize> {
        let grid = &self.grid;
        find_axis(grid.height(), smudges, |a, b| {
            grid.row(a).iter().zip(grid.row(b)).filter(|(x, y)| x != y).count()
        })
    }

    pub fn score(&self, smudges: usize) -> usize {
        let vertical = self.vertical_axis(smudges);
        let horizontal = self.horizontal_axis(smudges);
        debug!(
            "pattern {}x{}: vertical {:?}, horizontal {:?}",
            self.grid.width(),
            self.grid.height(),
            vertical,
            horizontal
        );
        vertical.unwrap_or(0) + 100 * horizontal.unwrap_or(0)
    }
}

pub fn summarize(patterns: &[Pattern], smudges: usize) -> usize {
    patterns.iter().map(|p| p.score(smudges)).sum()
}
