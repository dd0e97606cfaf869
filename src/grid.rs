use std::cmp::max;
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

/// Byte used for cells missing from short lines.
const PAD: u8 = b'.';

/// Dense row-major grid of ASCII cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Grid {
        let width = lines
            .iter()
            .fold(0, |width, line| max(width, line.as_ref().len()));
        let height = lines.len();

        // Extend potentially short rows.
        let mut cells = vec![PAD; width * height];
        for (i, line) in lines.iter().enumerate() {
            let row = line.as_ref().as_bytes();
            cells[i * width..i * width + row.len()].copy_from_slice(row);
        }

        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, i: usize) -> &[u8] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }

    pub fn column(&self, j: usize) -> impl Iterator<Item = u8> + '_ {
        (0..self.height).map(move |i| self[(i, j)])
    }

    /// Every `(row, column)` holding `cell`, in row-major order.
    pub fn positions(&self, cell: u8) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == cell)
            .map(|(n, _)| (n / self.width, n % self.width))
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u8;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[i * self.width + j]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[i * self.width + j]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..self.height {
            if i > 0 {
                writeln!(f)?;
            }
            let row: String = self.row(i).iter().map(|c| *c as char).collect();
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_lines_are_padded() {
        let grid = Grid::from_lines(&["#", "..#", "#."]);
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.row(0), b"#..");
        assert_eq!(grid.to_string(), "#..\n..#\n#..");
    }

    #[test]
    fn test_index_and_column() {
        let mut grid = Grid::from_lines(&["ab", "cd", "ef"]);
        assert_eq!(grid[(2, 1)], b'f');
        grid[(0, 1)] = b'x';
        assert_eq!(grid.column(1).collect::<Vec<_>>(), b"xdf");
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::from_lines(&[".#.", "#..", "..#"]);
        let found: Vec<_> = grid.positions(b'#').collect();
        assert_eq!(found, [(0, 1), (1, 0), (2, 2)]);
    }

    #[test]
    fn test_empty() {
        let grid = Grid::from_lines::<&str>(&[]);
        assert_eq!((grid.width(), grid.height()), (0, 0));
        assert_eq!(grid.positions(b'#').count(), 0);
        assert_eq!(grid.to_string(), "");
    }
}
