use super::board::Board;
use super::types::{Mark, WinCombination};

pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

/// Returns the first combination, in [`WIN_COMBINATIONS`] order, fully held by `mark`.
pub fn check_win(board: &Board, mark: Mark) -> Option<WinCombination> {
    WIN_COMBINATIONS
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.iter().all(|&index| board.mark_at(index) == Some(mark)))
        .map(|(id, &cells)| WinCombination::new(id, cells))
}

pub fn check_win_any(board: &Board) -> Option<(Mark, WinCombination)> {
    [Mark::O, Mark::X]
        .into_iter()
        .find_map(|mark| check_win(board, mark).map(|line| (mark, line)))
}
