use std::str::FromStr;

use common::games::tictactoe::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    NewGame,
    Scores,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl std::fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown command '{}', type 'h' for help", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        // Out-of-range numbers still parse so the controller reports them.
        if let Ok(index) = input.parse::<usize>() {
            return Ok(Command::Place(index));
        }
        match input.to_ascii_lowercase().as_str() {
            "n" | "new" => Ok(Command::NewGame),
            "s" | "score" | "scores" => Ok(Command::Scores),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(UnknownCommand(input.to_string())),
        }
    }
}

pub fn help_text() -> String {
    format!(
        "Commands: 0-{} place a mark, n new game, s scores, h help, q quit",
        BOARD_SIZE - 1
    )
}
