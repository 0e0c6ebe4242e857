use super::settings::SessionSettings;
use super::types::{Difficulty, GameMode, GameStatus, Mark, Outcome, Tally};

/// Running totals for the lifetime of a controller. Survives "play again".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    o_wins: u32,
    x_wins: u32,
    ties: u32,
}

impl Scoreboard {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::O => self.o_wins,
            Mark::X => self.x_wins,
        }
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn get(&self, tally: Tally) -> u32 {
        match tally {
            Tally::Wins(mark) => self.wins(mark),
            Tally::Ties => self.ties,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.o_wins + self.x_wins + self.ties
    }

    fn record(&mut self, winner: Option<Mark>) -> Tally {
        let tally = match winner {
            Some(mark) => Tally::Wins(mark),
            None => Tally::Ties,
        };
        match tally {
            Tally::Wins(Mark::O) => self.o_wins += 1,
            Tally::Wins(Mark::X) => self.x_wins += 1,
            Tally::Ties => self.ties += 1,
        }
        tally
    }
}

/// Turn and score state owned by one controller.
#[derive(Debug, Clone)]
pub struct GameSession {
    settings: SessionSettings,
    current_mark: Mark,
    status: GameStatus,
    scoreboard: Scoreboard,
}

impl GameSession {
    /// The human always holds `O` in single-player; `X` belongs to the search.
    pub const HUMAN_MARK: Mark = Mark::O;
    pub const AI_MARK: Mark = Mark::X;

    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            current_mark: Self::HUMAN_MARK,
            status: GameStatus::InProgress,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn human_mark(&self) -> Mark {
        Self::HUMAN_MARK
    }

    pub fn ai_mark(&self) -> Mark {
        Self::AI_MARK
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_computer_turn(&self) -> bool {
        self.settings.mode == GameMode::SinglePlayer
            && !self.is_finished()
            && self.current_mark == Self::AI_MARK
    }

    pub fn outcome_for_winner(&self, winner: Mark) -> Outcome {
        match self.settings.mode {
            GameMode::Multiplayer => Outcome::MultiplayerWin(winner),
            GameMode::SinglePlayer if winner == Self::HUMAN_MARK => Outcome::HumanWin,
            GameMode::SinglePlayer => Outcome::AiWin,
        }
    }

    pub(super) fn begin_game(&mut self, first_mark: Mark) {
        self.current_mark = first_mark;
        self.status = GameStatus::InProgress;
    }

    pub(super) fn advance_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    /// Freezes the game and bumps the matching tally, returning the tally and
    /// its new value.
    pub(super) fn finish(&mut self, outcome: Outcome) -> (Tally, u32) {
        self.status = GameStatus::Finished(outcome);
        let tally = self.scoreboard.record(outcome.winner(Self::HUMAN_MARK));
        (tally, self.scoreboard.get(tally))
    }
}
