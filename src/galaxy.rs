//! Cosmic expansion: summed distances between galaxies in an expanding image.

use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use crate::grid::Grid;
use crate::input;
use crate::Result;

pub const LINE_PATTERN: &str = r"^[.#]+$";

const GALAXY: u8 = b'#';

pub struct Universe {
    galaxies: Vec<(usize, usize)>,
    empty_rows: Vec<usize>,
    empty_columns: Vec<usize>,
}

impl Universe {
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Universe> {
        let lines = input::read_matching(path, LINE_PATTERN)?;
        Ok(Universe::from_lines(&lines))
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Universe {
        let image = Grid::from_lines(lines);

        let empty_rows: Vec<usize> = (0..image.height())
            .filter(|&i| !image.row(i).contains(&GALAXY))
            .collect();
        let empty_columns: Vec<usize> = (0..image.width())
            .filter(|&j| image.column(j).all(|c| c != GALAXY))
            .collect();
        debug!("empty rows {:?}, empty columns {:?}", empty_rows, empty_columns);

        Universe {
            galaxies: image.positions(GALAXY).collect(),
            empty_rows,
            empty_columns,
        }
    }

    pub fn galaxies(&self) -> &[(usize, usize)] {
        &self.galaxies
    }

    pub fn empty_rows(&self) -> &[usize] {
        &self.empty_rows
    }

    pub fn empty_columns(&self) -> &[usize] {
        &self.empty_columns
    }

    /// Galaxy positions after every empty row and column grows by `rate` more.
    pub fn expanded(&self, rate: u64) -> Vec<(u64, u64)> {
        // Empty lines before `n`; both lists are sorted.
        let before = |lines: &[usize], n: usize| lines.partition_point(|&l| l < n) as u64;

        self.galaxies
            .iter()
            .map(|&(i, j)| {
                (
                    (i as u64).saturating_add(rate.saturating_mul(before(&self.empty_rows, i))),
                    (j as u64).saturating_add(rate.saturating_mul(before(&self.empty_columns, j))),
                )
            })
            .collect()
    }

    /// Sum of Manhattan distances over every unordered pair of galaxies.
    pub fn distance_sum(&self, rate: u64) -> u64 {
        let galaxies = self.expanded(rate);
        debug!("expanded galaxies {:?}", galaxies);

        galaxies
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.0.abs_diff(b.0).saturating_add(a.1.abs_diff(b.1)))
            .fold(0, u64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: [&str; 10] = [
        "...#......",
        ".......#..",
        "#.........",
        "..........",
        "......#...",
        ".#........",
        ".........#",
        "..........",
        ".......#..",
        "#...#.....",
    ];

    #[test]
    fn test_empty_space() {
        let universe = Universe::from_lines(&IMAGE);
        assert_eq!(universe.empty_rows(), [3, 7]);
        assert_eq!(universe.empty_columns(), [2, 5, 8]);
        assert_eq!(universe.galaxies().len(), 9);
    }

    #[test]
    fn test_expanded_positions() {
        let universe = Universe::from_lines(&IMAGE);
        let expanded = universe.expanded(1);
        assert_eq!(expanded[0], (0, 4));
        assert_eq!(expanded[8], (11, 5));
    }

    #[test]
    fn test_distance_sum() {
        let universe = Universe::from_lines(&IMAGE);
        assert_eq!(universe.distance_sum(1), 374);
        assert_eq!(universe.distance_sum(9), 1030);
        assert_eq!(universe.distance_sum(99), 8410);
    }

    #[test]
    fn test_no_expansion() {
        let universe = Universe::from_lines(&["#.#", "...", "..#"]);
        // (0,0)-(0,2)=2, (0,0)-(2,2)=4, (0,2)-(2,2)=2
        assert_eq!(universe.distance_sum(0), 8);
        // Row 1 is empty; column 1 is empty.
        assert_eq!(universe.distance_sum(1), 12);
    }

    #[test]
    fn test_huge_expansion_saturates() {
        let universe = Universe::from_lines(&IMAGE);
        assert_eq!(universe.expanded(u64::MAX)[8], (u64::MAX, u64::MAX));
        assert_eq!(universe.distance_sum(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_single_galaxy() {
        let universe = Universe::from_lines(&["..", ".#"]);
        assert_eq!(universe.distance_sum(1_000_000), 0);
    }
}
