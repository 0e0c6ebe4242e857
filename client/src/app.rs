use common::games::tictactoe::{GameController, GameMode, Mark, SessionSettings, Tally};

use crate::command::{help_text, Command};
use crate::console_broadcaster::ConsoleBroadcaster;

pub enum Step {
    Continue(Vec<String>),
    Quit,
}

pub struct App {
    controller: GameController<ConsoleBroadcaster>,
}

impl App {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            controller: GameController::new(settings, ConsoleBroadcaster::default()),
        }
    }

    pub fn intro(&mut self) -> Vec<String> {
        let session = self.controller.session();
        let mut lines = vec![match session.mode() {
            GameMode::SinglePlayer => format!(
                "You play {} against the computer ({:?}), seed {}",
                session.human_mark(),
                session.difficulty(),
                self.controller.seed()
            ),
            GameMode::Multiplayer => "Two players, O and X, take turns".to_string(),
        }];
        lines.push(help_text());
        lines.extend(self.render());
        lines
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => return Step::Continue(vec![err.to_string()]),
        };

        let mut lines = Vec::new();
        match command {
            Command::Quit => return Step::Quit,
            Command::Help => lines.push(help_text()),
            Command::Scores => lines.push(self.scores()),
            Command::NewGame => {
                self.controller.start_game();
                lines.extend(self.render());
            }
            Command::Place(index) => match self.controller.attempt_placement(index) {
                Ok(()) => lines.extend(self.render()),
                Err(err) => lines.push(err.to_string()),
            },
        }
        Step::Continue(lines)
    }

    fn render(&mut self) -> Vec<String> {
        let mut lines = self.controller.broadcaster_mut().drain();
        lines.push(self.controller.board().to_string());

        let session = self.controller.session();
        if session.is_finished() {
            lines.push("Game over, 'n' starts a new game".to_string());
        } else {
            lines.push(format!("{} to move", session.current_mark()));
        }
        lines
    }

    fn scores(&self) -> String {
        let scoreboard = self.controller.session().scoreboard();
        format!(
            "O: {}  X: {}  {}: {}",
            scoreboard.wins(Mark::O),
            scoreboard.wins(Mark::X),
            Tally::Ties,
            scoreboard.ties()
        )
    }
}
