//! Tic Tac Toe board.
use std::fmt;

use crate::board_game::Mark;

use Mark::Blank;
#[cfg(test)]
use Mark::{O, X};

// the board size used when none is given
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Store the size and state of an n x n tic-tac-toe board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    // dimension of the board (total number of cells = size * size)
    size: usize,
    // for example: 3x3 grid would be a vec of length 9
    cells: Vec<Mark>,
}

impl fmt::Debug for Board {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let board_repr: String = self.cells.iter().map(|mark| mark.symbol()).collect();
        write!(
            formatter,
            "Board {{ size: {}, cells: [{}] }}",
            self.size, board_repr
        )
    }
}

/// Draw the board with the digit labels a human player types in:
///
///    0 1 2
/// 0  . . .
/// 1  . X .
/// 2  O . .
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:<2}", row)?;
            for col in 0..self.size {
                write!(f, " {}", self.cells[row * self.size + col].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    /// Return a new Board of (size * size) blank cells.
    pub fn new(size: usize) -> Board {
        Board {
            cells: vec![Blank; size * size],
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Are (row, col) inside the grid?
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// The mark at (row, col), or Blank if the coordinates are off the board.
    pub fn mark_at(&self, row: usize, col: usize) -> Mark {
        if !self.contains(row, col) {
            return Blank;
        }
        self.cells[row * self.size + col]
    }

    /// Place `mark` at (row, col). Returns false and leaves the board untouched if the
    /// coordinates are off the board or the cell is already taken.
    pub fn put_mark(&mut self, mark: Mark, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let idx = row * self.size + col;
        match self.cells[idx] {
            Blank => {
                self.cells[idx] = mark;
                true
            }
            _ => false,
        }
    }

    /// Return a vector of the (row, col) cells still blank, in row-major order.
    pub fn blank_cells(&self) -> Vec<(usize, usize)> {
        let mut blanks = Vec::new();
        for (i, mark) in self.cells.iter().enumerate() {
            if let Blank = mark {
                blanks.push((i / self.size, i % self.size));
            }
        }
        blanks
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Blank)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }
}

#[test]
fn test_put_mark() {
    let size = 3;
    let mut board = Board::new(size);
    assert_eq!(board.blank_cells().len(), size * size);

    assert!(board.put_mark(X, 1, 1));
    assert_eq!(board.mark_at(1, 1), X);
    assert_eq!(board.blank_cells().len(), size * size - 1);

    assert!(board.put_mark(O, 1, 2));
    // cell taken
    assert!(!board.put_mark(X, 1, 2));
    assert_eq!(board.mark_at(1, 2), O);
    // out of range
    assert!(!board.put_mark(X, 1, 3));
    assert!(!board.put_mark(X, 3, 0));
    assert_eq!(board.count(X), 1);
    assert_eq!(board.count(O), 1);
}

#[test]
fn test_mark_at_out_of_range() {
    let mut board = Board::new(2);
    assert!(board.put_mark(X, 1, 1));
    assert_eq!(board.mark_at(2, 0), Blank);
    assert_eq!(board.mark_at(0, 2), Blank);
    assert_eq!(board.mark_at(usize::MAX, usize::MAX), Blank);
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2);
    assert!(!board.is_full());
    for (row, col) in board.blank_cells() {
        assert!(board.put_mark(O, row, col));
    }
    assert!(board.is_full());
    assert!(board.blank_cells().is_empty());
}

#[test]
fn test_default_and_display() {
    let board = Board::default();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);

    let mut board = Board::new(3);
    board.put_mark(X, 1, 1);
    board.put_mark(O, 2, 0);
    assert_eq!(format!("{}", board), "   0 1 2\n0  . . .\n1  . X .\n2  O . .\n");
    assert_eq!(format!("{:?}", board), "Board { size: 3, cells: [....X.O..] }");
}
