mod app;
mod command;
mod config;
mod console_broadcaster;

use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::tictactoe::{Difficulty, FirstPlayer, GameMode, SessionSettings};
use common::{log, logger};

use app::{App, Step};
use config::{get_config_manager, CONFIG_FILE};

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Multi,
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Computer,
    Random,
}

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against a minimax opponent")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,

    /// Log engine activity to stderr.
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_overrides(&self, settings: &mut SessionSettings) {
        if let Some(mode) = self.mode {
            settings.mode = match mode {
                ModeArg::Single => GameMode::SinglePlayer,
                ModeArg::Multi => GameMode::Multiplayer,
            };
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = match difficulty {
                DifficultyArg::Easy => Difficulty::Easy,
                DifficultyArg::Medium => Difficulty::Medium,
                DifficultyArg::Hard => Difficulty::Hard,
            };
        }
        if let Some(first_player) = self.first_player {
            settings.first_player = match first_player {
                FirstPlayerArg::Human => FirstPlayer::Human,
                FirstPlayerArg::Computer => FirstPlayer::Computer,
                FirstPlayerArg::Random => FirstPlayer::Random,
            };
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = args.use_log_prefix.then(|| "TicTacToe".to_string());
        logger::init_logger(prefix);
    }

    let config_manager = get_config_manager(&args.config);
    let mut settings = config_manager.get_config()?;
    args.apply_overrides(&mut settings);
    settings.validate()?;

    if args.save_config {
        config_manager.set_config(&settings)?;
        log!("Saved settings to {}", args.config.display());
    }

    let mut app = App::new(settings);
    for line in app.intro() {
        println!("{}", line);
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match app.handle_line(&line) {
            Step::Continue(output) => {
                for text in output {
                    println!("{}", text);
                }
            }
            Step::Quit => break,
        }
    }

    log!("Session finished");
    Ok(())
}
