use super::board::{Board, BOARD_SIZE};

/// Why a requested placement was refused. Nothing on the board changes when
/// one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    OutOfRange { index: usize },
    CellOccupied { index: usize },
    GameFinished,
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::OutOfRange { index } => {
                write!(f, "Cell {} is outside the board (0-{})", index, BOARD_SIZE - 1)
            }
            PlacementError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            PlacementError::GameFinished => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for PlacementError {}

pub fn validate_placement(board: &Board, index: usize) -> Result<(), PlacementError> {
    if index >= BOARD_SIZE {
        return Err(PlacementError::OutOfRange { index });
    }
    if !board.open_cells().contains(&index) {
        return Err(PlacementError::CellOccupied { index });
    }
    Ok(())
}
