use std::fmt;
use std::ops::{Deref, DerefMut};

use super::types::{Cell, Mark, WinCombination};
use super::win_detector;

pub const BOARD_SIZE: usize = 9;
pub const BOARD_WIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Parses a row-major pattern of nine `X`, `O` and `.` characters.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        let mut board = Self::new();
        let mut count = 0;
        for (index, ch) in pattern.chars().enumerate() {
            if index >= BOARD_SIZE {
                return None;
            }
            board.cells[index] = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '_' => Cell::Empty,
                _ => return None,
            };
            count += 1;
        }
        (count == BOARD_SIZE).then_some(board)
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.cell(index).and_then(Cell::mark)
    }

    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    /// Caller guarantees `index` is open; the controller only passes cells
    /// taken from [`Board::open_cells`].
    pub fn place_mark(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.cells[index].is_empty(), "cell {} is already occupied", index);
        self.cells[index] = Cell::Occupied(mark);
    }

    pub fn open_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn check_win(&self, mark: Mark) -> Option<WinCombination> {
        win_detector::check_win(self, mark)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(mark))
            .count()
    }

    /// Places `mark` for the lifetime of the returned guard. The cell is
    /// emptied again when the guard drops, on every exit path.
    pub fn trial(&mut self, index: usize, mark: Mark) -> TrialPlacement<'_> {
        self.place_mark(index, mark);
        TrialPlacement { board: self, index }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_WIDTH {
            for col in 0..BOARD_WIDTH {
                let index = row * BOARD_WIDTH + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col + 1 < BOARD_WIDTH {
                    write!(f, "|")?;
                }
            }
            if row + 1 < BOARD_WIDTH {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

pub struct TrialPlacement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for TrialPlacement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialPlacement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialPlacement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}
