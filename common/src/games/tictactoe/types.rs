use std::fmt;

use serde::{Deserialize, Serialize};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const TIE_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// One of the eight lines that win the game, identified by its position in
/// [`WIN_COMBINATIONS`](super::win_detector::WIN_COMBINATIONS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinCombination {
    pub id: usize,
    pub cells: [usize; 3],
}

impl WinCombination {
    pub fn new(id: usize, cells: [usize; 3]) -> Self {
        Self { id, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// A searched move: the chosen cell and the minimax score it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub index: usize,
    pub score: i32,
}

impl Move {
    pub fn new(index: usize, score: i32) -> Self {
        Self { index, score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    SinglePlayer,
    Multiplayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayer {
    #[default]
    Human,
    Computer,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    HumanWin,
    AiWin,
    MultiplayerWin(Mark),
    Tie,
}

impl Outcome {
    pub fn winner(self, human_mark: Mark) -> Option<Mark> {
        match self {
            Outcome::HumanWin => Some(human_mark),
            Outcome::AiWin => Some(human_mark.opponent()),
            Outcome::MultiplayerWin(mark) => Some(mark),
            Outcome::Tie => None,
        }
    }

    pub fn message(self) -> String {
        match self {
            Outcome::HumanWin => "You win!".to_string(),
            Outcome::AiWin => "You lose.".to_string(),
            Outcome::MultiplayerWin(mark) => format!("{} wins!", mark),
            Outcome::Tie => "Tie Game!".to_string(),
        }
    }
}

/// Which running tally a score update refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tally {
    Wins(Mark),
    Ties,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tally::Wins(mark) => write!(f, "{}", mark),
            Tally::Ties => write!(f, "Ties"),
        }
    }
}
