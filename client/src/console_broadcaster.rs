use common::games::tictactoe::{GameBroadcaster, Mark, Outcome, Tally, WinCombination};

/// Turns controller notifications into lines of terminal text. The app
/// drains them after every command.
#[derive(Debug, Default)]
pub struct ConsoleBroadcaster {
    pending: Vec<String>,
}

impl ConsoleBroadcaster {
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

impl GameBroadcaster for ConsoleBroadcaster {
    fn on_cell_filled(&mut self, index: usize, mark: Mark) {
        self.pending.push(format!("{} takes cell {}", mark, index));
    }

    fn on_game_over(&mut self, outcome: Outcome, winning_combination: Option<WinCombination>) {
        match winning_combination {
            Some(line) => self.pending.push(format!(
                "{} (cells {}, {}, {})",
                outcome.message(),
                line.cells[0],
                line.cells[1],
                line.cells[2]
            )),
            None => self.pending.push(outcome.message()),
        }
    }

    fn on_score_updated(&mut self, tally: Tally, value: u32) {
        self.pending.push(format!("Score {}: {}", tally, value));
    }
}
