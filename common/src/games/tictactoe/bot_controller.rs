use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::types::{Difficulty, Mark, Move, LOSS_SCORE, TIE_SCORE, WIN_SCORE};

const MEDIUM_RANDOM_CHANCE: f64 = 0.5;

pub struct BotInput {
    pub board: Board,
    pub ai_mark: Mark,
    pub human_mark: Mark,
}

impl BotInput {
    pub fn new(board: &Board, ai_mark: Mark) -> Self {
        Self {
            board: board.clone(),
            ai_mark,
            human_mark: ai_mark.opponent(),
        }
    }

    fn is_decided(&self) -> bool {
        self.board.check_win(self.human_mark).is_some()
            || self.board.check_win(self.ai_mark).is_some()
            || self.board.is_full()
    }
}

/// Picks the computer's cell for the given difficulty. Returns `None` when
/// the board is already decided, so a finished game never yields a move.
pub fn calculate_move(
    difficulty: Difficulty,
    mut input: BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    if input.is_decided() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_RANDOM_CHANCE) {
                calculate_random_move(&input.board, rng)
            } else {
                calculate_minimax_move(&mut input)
            }
        }
        Difficulty::Hard => calculate_minimax_move(&mut input),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.open_cells())
}

fn calculate_minimax_move(input: &mut BotInput) -> Option<usize> {
    let best = best_move(&mut input.board, input.ai_mark, input.human_mark)?;
    log!(
        "Minimax picked cell {} for {} (score {})",
        best.index,
        input.ai_mark,
        best.score
    );
    Some(best.index)
}

/// Full minimax from the AI's point of view. The board is left exactly as it
/// was passed in.
pub fn best_move(board: &mut Board, ai_mark: Mark, human_mark: Mark) -> Option<Move> {
    let evaluation = minimax(board, ai_mark, ai_mark, human_mark);
    evaluation.index.map(|index| Move::new(index, evaluation.score))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub index: Option<usize>,
    pub score: i32,
}

impl Evaluation {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

pub fn minimax(board: &mut Board, player: Mark, ai_mark: Mark, human_mark: Mark) -> Evaluation {
    if board.check_win(human_mark).is_some() {
        return Evaluation::terminal(LOSS_SCORE);
    }
    if board.check_win(ai_mark).is_some() {
        return Evaluation::terminal(WIN_SCORE);
    }

    let open_cells = board.open_cells();
    if open_cells.is_empty() {
        return Evaluation::terminal(TIE_SCORE);
    }

    let maximizing = player == ai_mark;
    let next_player = if maximizing { human_mark } else { ai_mark };
    let mut best: Option<Move> = None;

    for index in open_cells {
        let score = {
            let mut trial = board.trial(index, player);
            minimax(&mut trial, next_player, ai_mark, human_mark).score
        };

        // Strict comparison keeps the first candidate among equal scores.
        let improves = match best {
            None => true,
            Some(current) if maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(Move::new(index, score));
        }
    }

    match best {
        Some(chosen) => Evaluation {
            index: Some(chosen.index),
            score: chosen.score,
        },
        None => Evaluation::terminal(TIE_SCORE),
    }
}
