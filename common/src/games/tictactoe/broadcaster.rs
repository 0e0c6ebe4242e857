use super::types::{Mark, Outcome, Tally, WinCombination};

/// Presentation hooks the controller calls after each state change. Hosts
/// implement this to draw cells, announce results and refresh scores.
pub trait GameBroadcaster {
    fn on_cell_filled(&mut self, index: usize, mark: Mark);

    fn on_game_over(&mut self, outcome: Outcome, winning_combination: Option<WinCombination>);

    fn on_score_updated(&mut self, tally: Tally, value: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CellFilled { index: usize, mark: Mark },
    GameOver {
        outcome: Outcome,
        winning_combination: Option<WinCombination>,
    },
    ScoreUpdated { tally: Tally, value: u32 },
}

/// Records every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn filled_cells(&self) -> Vec<(usize, Mark)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::CellFilled { index, mark } => Some((*index, *mark)),
                _ => None,
            })
            .collect()
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::GameOver { outcome, .. } => Some(*outcome),
                _ => None,
            })
            .collect()
    }
}

impl GameBroadcaster for EventLog {
    fn on_cell_filled(&mut self, index: usize, mark: Mark) {
        self.events.push(GameEvent::CellFilled { index, mark });
    }

    fn on_game_over(&mut self, outcome: Outcome, winning_combination: Option<WinCombination>) {
        self.events.push(GameEvent::GameOver {
            outcome,
            winning_combination,
        });
    }

    fn on_score_updated(&mut self, tally: Tally, value: u32) {
        self.events.push(GameEvent::ScoreUpdated { tally, value });
    }
}
