mod board;
mod bot_controller;
mod broadcaster;
mod game_controller;
mod game_session;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::{Board, TrialPlacement, BOARD_SIZE, BOARD_WIDTH};
pub use bot_controller::{best_move, calculate_move, minimax, BotInput, Evaluation};
pub use broadcaster::{EventLog, GameBroadcaster, GameEvent};
pub use game_controller::GameController;
pub use game_session::{GameSession, Scoreboard};
pub use settings::SessionSettings;
pub use types::*;
pub use validate::{validate_placement, PlacementError};
pub use win_detector::{check_win, check_win_any, WIN_COMBINATIONS};
