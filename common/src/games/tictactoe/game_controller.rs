use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{calculate_move, BotInput};
use super::broadcaster::GameBroadcaster;
use super::game_session::GameSession;
use super::settings::SessionSettings;
use super::types::{FirstPlayer, Mark, Outcome, WinCombination};
use super::validate::{validate_placement, PlacementError};

/// Sequences turns for one session: validates host input, runs the search on
/// the computer's turn and reports results through the broadcaster.
pub struct GameController<B: GameBroadcaster> {
    board: Board,
    session: GameSession,
    rng: SessionRng,
    broadcaster: B,
}

impl<B: GameBroadcaster> GameController<B> {
    /// Builds the controller and starts the first game.
    pub fn new(settings: SessionSettings, broadcaster: B) -> Self {
        let rng = SessionRng::from_optional_seed(settings.seed);
        Self::with_rng(settings, rng, broadcaster)
    }

    pub fn with_rng(settings: SessionSettings, rng: SessionRng, broadcaster: B) -> Self {
        log!(
            "Session created: mode {:?}, difficulty {:?}, first player {:?}, seed {}",
            settings.mode,
            settings.difficulty,
            settings.first_player,
            rng.seed()
        );

        let mut controller = Self {
            board: Board::new(),
            session: GameSession::new(settings),
            rng,
            broadcaster,
        };
        controller.start_game();
        controller
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Discards the board and starts over. Tallies are kept.
    pub fn start_game(&mut self) {
        self.board = Board::new();
        let first_mark = self.pick_first_mark();
        self.session.begin_game(first_mark);
        log!("New game, {} moves first", first_mark);

        if self.session.is_computer_turn() {
            self.play_computer_turn();
        }
    }

    /// Places the current player's mark at `index`. In single-player the
    /// computer answers before this returns.
    pub fn attempt_placement(&mut self, index: usize) -> Result<(), PlacementError> {
        if self.session.is_finished() {
            return Err(PlacementError::GameFinished);
        }
        if let Err(err) = validate_placement(&self.board, index) {
            log!("Rejected placement: {}", err);
            return Err(err);
        }

        let mark = self.session.current_mark();
        self.apply_placement(index, mark);

        if self.session.is_computer_turn() {
            self.play_computer_turn();
        }
        Ok(())
    }

    fn pick_first_mark(&mut self) -> Mark {
        let human_mark = self.session.human_mark();
        match self.session.settings().first_player {
            FirstPlayer::Human => human_mark,
            FirstPlayer::Computer => human_mark.opponent(),
            FirstPlayer::Random => {
                if self.rng.chance(0.5) {
                    human_mark
                } else {
                    human_mark.opponent()
                }
            }
        }
    }

    fn play_computer_turn(&mut self) {
        let ai_mark = self.session.ai_mark();
        let input = BotInput::new(&self.board, ai_mark);

        match calculate_move(self.session.difficulty(), input, &mut self.rng) {
            Some(index) => self.apply_placement(index, ai_mark),
            None => log!("No move available for {}", ai_mark),
        }
    }

    fn apply_placement(&mut self, index: usize, mark: Mark) {
        self.board.place_mark(index, mark);
        self.broadcaster.on_cell_filled(index, mark);

        if let Some(line) = self.board.check_win(mark) {
            let outcome = self.session.outcome_for_winner(mark);
            self.finish_game(outcome, Some(line));
        } else if self.board.is_full() {
            self.finish_game(Outcome::Tie, None);
        } else {
            self.session.advance_turn();
        }
    }

    fn finish_game(&mut self, outcome: Outcome, winning_combination: Option<WinCombination>) {
        let (tally, value) = self.session.finish(outcome);
        log!("Game over: {:?}\n{}", outcome, self.board);

        self.broadcaster.on_game_over(outcome, winning_combination);
        self.broadcaster.on_score_updated(tally, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Difficulty, EventLog, GameEvent, GameMode, GameStatus, Tally};

    fn multiplayer() -> GameController<EventLog> {
        GameController::with_rng(
            SessionSettings::multiplayer(),
            SessionRng::new(0),
            EventLog::default(),
        )
    }

    fn single_player(difficulty: Difficulty, seed: u64) -> GameController<EventLog> {
        GameController::with_rng(
            SessionSettings::single_player(difficulty),
            SessionRng::new(seed),
            EventLog::default(),
        )
    }

    fn play(controller: &mut GameController<EventLog>, moves: &[usize]) {
        for &index in moves {
            controller.attempt_placement(index).unwrap();
        }
    }

    const O_WINS: [usize; 5] = [0, 3, 1, 4, 2];
    const X_WINS: [usize; 6] = [0, 3, 1, 4, 8, 5];
    const TIE: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    #[test]
    fn test_single_player_computer_answers_immediately() {
        let mut controller = single_player(Difficulty::Hard, 1);
        controller.attempt_placement(4).unwrap();

        let filled = controller.broadcaster().filled_cells();
        assert_eq!(filled.len(), 2);
        assert_eq!(filled[0], (4, Mark::O));
        assert_eq!(filled[1].1, Mark::X);
        assert_eq!(controller.board().mark_count(Mark::X), 1);
        assert_eq!(controller.session().current_mark(), Mark::O);
    }

    #[test]
    fn test_invalid_placements_change_nothing() {
        let mut controller = multiplayer();
        controller.attempt_placement(0).unwrap();
        let before = controller.board().clone();
        controller.broadcaster_mut().take();

        assert_eq!(
            controller.attempt_placement(0),
            Err(PlacementError::CellOccupied { index: 0 })
        );
        assert_eq!(
            controller.attempt_placement(9),
            Err(PlacementError::OutOfRange { index: 9 })
        );
        assert_eq!(controller.board(), &before);
        assert!(controller.broadcaster().events().is_empty());
        assert_eq!(controller.session().current_mark(), Mark::X);
    }

    #[test]
    fn test_multiplayer_alternates_marks() {
        let mut controller = multiplayer();
        assert_eq!(controller.session().mode(), GameMode::Multiplayer);
        play(&mut controller, &[0, 4, 8]);
        assert_eq!(
            controller.broadcaster().filled_cells(),
            vec![(0, Mark::O), (4, Mark::X), (8, Mark::O)]
        );
        assert_eq!(controller.session().current_mark(), Mark::X);
    }

    #[test]
    fn test_multiplayer_win_reports_line_and_score() {
        let mut controller = multiplayer();
        play(&mut controller, &X_WINS);

        let events = controller.broadcaster().events();
        let tail = &events[events.len() - 2..];
        assert_eq!(
            tail,
            &[
                GameEvent::GameOver {
                    outcome: Outcome::MultiplayerWin(Mark::X),
                    winning_combination: Some(WinCombination::new(1, [3, 4, 5])),
                },
                GameEvent::ScoreUpdated { tally: Tally::Wins(Mark::X), value: 1 },
            ]
        );
        assert_eq!(
            controller.session().status(),
            GameStatus::Finished(Outcome::MultiplayerWin(Mark::X))
        );
    }

    #[test]
    fn test_tie_game_freezes_board() {
        let mut controller = multiplayer();
        play(&mut controller, &TIE);

        assert!(controller.board().is_full());
        assert_eq!(controller.board().check_win(Mark::O), None);
        assert_eq!(controller.board().check_win(Mark::X), None);
        assert_eq!(controller.broadcaster().outcomes(), vec![Outcome::Tie]);
        assert!(controller.broadcaster().events().contains(&GameEvent::GameOver {
            outcome: Outcome::Tie,
            winning_combination: None,
        }));
        assert_eq!(controller.attempt_placement(0), Err(PlacementError::GameFinished));
    }

    #[test]
    fn test_win_freezes_remaining_cells() {
        let mut controller = multiplayer();
        play(&mut controller, &O_WINS);
        assert_eq!(controller.attempt_placement(8), Err(PlacementError::GameFinished));
        assert!(controller.board().is_open(8));
    }

    #[test]
    fn test_tallies_after_scripted_games() {
        let mut controller = multiplayer();
        let games: [&[usize]; 6] = [&O_WINS, &TIE, &X_WINS, &TIE, &O_WINS, &TIE];
        for (i, moves) in games.iter().enumerate() {
            if i > 0 {
                controller.start_game();
            }
            play(&mut controller, moves);
        }

        let scoreboard = controller.session().scoreboard();
        assert_eq!(scoreboard.wins(Mark::O), 2);
        assert_eq!(scoreboard.wins(Mark::X), 1);
        assert_eq!(scoreboard.ties(), 3);
    }

    #[test]
    fn test_hard_computer_never_loses_to_scripted_human() {
        for seed in 0..5 {
            let mut controller = single_player(Difficulty::Hard, seed);
            while !controller.session().is_finished() {
                let index = controller.board().open_cells()[0];
                controller.attempt_placement(index).unwrap();
            }
            let outcomes = controller.broadcaster().outcomes();
            assert_eq!(outcomes.len(), 1);
            assert_ne!(outcomes[0], Outcome::HumanWin);
        }
    }

    #[test]
    fn test_single_player_tallies_match_reported_outcomes() {
        let mut controller = single_player(Difficulty::Easy, 11);
        for game in 0..20 {
            if game > 0 {
                controller.start_game();
            }
            while !controller.session().is_finished() {
                let open = controller.board().open_cells();
                controller.attempt_placement(open[open.len() / 2]).unwrap();
            }
        }

        let outcomes = controller.broadcaster().outcomes();
        assert_eq!(outcomes.len(), 20);
        let count = |wanted: Outcome| outcomes.iter().filter(|&&o| o == wanted).count() as u32;

        let scoreboard = controller.session().scoreboard();
        assert_eq!(scoreboard.wins(Mark::O), count(Outcome::HumanWin));
        assert_eq!(scoreboard.wins(Mark::X), count(Outcome::AiWin));
        assert_eq!(scoreboard.ties(), count(Outcome::Tie));
    }

    #[test]
    fn test_every_accepted_cell_was_open() {
        let mut controller = single_player(Difficulty::Medium, 5);
        let mut seen = Board::new();
        while !controller.session().is_finished() {
            let index = *controller.board().open_cells().last().unwrap();
            controller.attempt_placement(index).unwrap();
        }
        for (index, mark) in controller.broadcaster().filled_cells() {
            assert!(seen.is_open(index));
            seen.place_mark(index, mark);
        }
        assert_eq!(&seen, controller.board());
    }

    #[test]
    fn test_computer_first_moves_on_start() {
        let settings = SessionSettings::single_player(Difficulty::Hard)
            .with_first_player(FirstPlayer::Computer);
        let controller = GameController::with_rng(settings, SessionRng::new(0), EventLog::default());

        assert_eq!(controller.board().mark_count(Mark::X), 1);
        assert_eq!(controller.board().mark_count(Mark::O), 0);
        assert_eq!(controller.session().current_mark(), Mark::O);
    }

    #[test]
    fn test_random_first_player_leaves_human_to_move() {
        for seed in 0..10 {
            let settings = SessionSettings::single_player(Difficulty::Easy)
                .with_first_player(FirstPlayer::Random);
            let controller =
                GameController::with_rng(settings, SessionRng::new(seed), EventLog::default());
            assert!(controller.board().mark_count(Mark::X) <= 1);
            assert_eq!(controller.board().mark_count(Mark::O), 0);
            assert_eq!(controller.session().current_mark(), Mark::O);
        }
    }

    #[test]
    fn test_start_game_resets_board_and_keeps_scores() {
        let mut controller = multiplayer();
        play(&mut controller, &O_WINS);
        controller.start_game();

        assert_eq!(controller.board(), &Board::new());
        assert_eq!(controller.session().status(), GameStatus::InProgress);
        assert_eq!(controller.session().current_mark(), Mark::O);
        assert_eq!(controller.session().scoreboard().wins(Mark::O), 1);
        controller.attempt_placement(0).unwrap();
    }

    #[test]
    fn test_seed_from_settings() {
        let settings = SessionSettings::single_player(Difficulty::Easy).with_seed(77);
        let controller = GameController::new(settings, EventLog::default());
        assert_eq!(controller.seed(), 77);
    }
}
