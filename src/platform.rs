//! Parabolic reflector dish: rolling rocks around a tilting platform.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::path::Path;

use tracing::{debug, trace};

use crate::grid::Grid;
use crate::input;
use crate::Result;

pub const LINE_PATTERN: &str = r"^[.#O]+$";

const ROUND: u8 = b'O';
const CUBE: u8 = b'#';
const EMPTY: u8 = b'.';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// Tilt order of one spin cycle.
    pub const SPIN: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Platform {
    grid: Grid,
}

impl Platform {
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Platform> {
        let lines = input::read_matching(path, LINE_PATTERN)?;
        Ok(Platform::from_lines(&lines))
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Platform {
        Platform {
            grid: Grid::from_lines(lines),
        }
    }

    /// Cells of lane `n`, starting from the edge rocks roll toward.
    fn lane(&self, direction: Direction, n: usize) -> Vec<(usize, usize)> {
        let (width, height) = (self.grid.width(), self.grid.height());
        match direction {
            Direction::North => (0..height).map(|i| (i, n)).collect(),
            Direction::South => (0..height).rev().map(|i| (i, n)).collect(),
            Direction::West => (0..width).map(|j| (n, j)).collect(),
            Direction::East => (0..width).rev().map(|j| (n, j)).collect(),
        }
    }

    fn lanes(&self, direction: Direction) -> usize {
        match direction {
            Direction::North | Direction::South => self.grid.width(),
            Direction::West | Direction::East => self.grid.height(),
        }
    }

    /// Roll every round rock as far as it goes toward `direction`.
    pub fn tilt(&mut self, direction: Direction) {
        for n in 0..self.lanes(direction) {
            let lane = self.lane(direction, n);
            // First cell a rolling rock can still land on.
            let mut free = 0;
            for (k, &cell) in lane.iter().enumerate() {
                match self.grid[cell] {
                    CUBE => free = k + 1,
                    ROUND => {
                        self.grid[cell] = EMPTY;
                        self.grid[lane[free]] = ROUND;
                        free += 1;
                    }
                    _ => {}
                }
            }
        }
    }

    pub fn spin(&mut self) {
        for direction in Direction::SPIN {
            self.tilt(direction);
        }
    }

    /// Run `count` spin cycles, skipping whole periods once a layout repeats.
    pub fn spin_cycles(&mut self, count: usize) {
        let mut seen: HashMap<Grid, usize> = HashMap::new();
        let mut done = 0;
        while done < count {
            if let Some(start) = seen.insert(self.grid.clone(), done) {
                let period = done - start;
                let remaining = (count - done) % period;
                debug!(
                    "layout after {} cycles repeats from cycle {}, period {}, {} left",
                    done, start, period, remaining
                );
                for _ in 0..remaining {
                    self.spin();
                }
                return;
            }
            self.spin();
            done += 1;
            trace!("load {} after {} cycles", self.north_load(), done);
        }
    }

    /// Total load on the north support beams.
    pub fn north_load(&self) -> usize {
        let height = self.grid.height();
        self.grid.positions(ROUND).map(|(i, _)| height - i).sum()
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
