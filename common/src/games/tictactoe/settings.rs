use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Difficulty, FirstPlayer, GameMode};

/// Per-session choices, fixed once a controller is built. Stored as YAML:
///
/// ```yaml
/// mode: single_player
/// difficulty: medium
/// first_player: human
/// seed: 42
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub first_player: FirstPlayer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SessionSettings {
    pub fn single_player(difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::SinglePlayer,
            difficulty,
            ..Self::default()
        }
    }

    pub fn multiplayer() -> Self {
        Self {
            mode: GameMode::Multiplayer,
            ..Self::default()
        }
    }

    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.mode == GameMode::Multiplayer && self.first_player == FirstPlayer::Computer {
            return Err("first_player 'computer' requires single_player mode".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigError, ConfigManager, MemoryContentConfigProvider, YamlConfigSerializer,
    };

    fn manager(content: Option<&str>) -> ConfigManager<MemoryContentConfigProvider, SessionSettings> {
        let provider = match content {
            Some(content) => MemoryContentConfigProvider::with_content(content),
            None => MemoryContentConfigProvider::default(),
        };
        ConfigManager::new(provider, YamlConfigSerializer)
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let settings = manager(None).get_config().unwrap();
        assert_eq!(settings, SessionSettings::default());
        assert_eq!(settings.mode, GameMode::SinglePlayer);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.first_player, FirstPlayer::Human);
    }

    #[test]
    fn test_parses_yaml() {
        let yaml = "mode: multiplayer\ndifficulty: easy\nfirst_player: random\nseed: 42\n";
        let settings = manager(Some(yaml)).get_config().unwrap();
        assert_eq!(settings.mode, GameMode::Multiplayer);
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.first_player, FirstPlayer::Random);
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = manager(Some("difficulty: medium\n")).get_config().unwrap();
        assert_eq!(settings, SessionSettings::single_player(Difficulty::Medium));
    }

    #[test]
    fn test_rejects_computer_first_in_multiplayer() {
        let yaml = "mode: multiplayer\nfirst_player: computer\n";
        let result = manager(Some(yaml)).get_config();
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        let result = manager(Some("difficulty: impossible\n")).get_config();
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_set_config_round_trips_through_store() {
        let manager = manager(None);
        let settings = SessionSettings::single_player(Difficulty::Easy)
            .with_first_player(FirstPlayer::Computer)
            .with_seed(9);
        manager.set_config(&settings).unwrap();
        assert_eq!(manager.get_config().unwrap(), settings);

        let invalid = SessionSettings::multiplayer().with_first_player(FirstPlayer::Computer);
        assert!(matches!(
            manager.set_config(&invalid),
            Err(ConfigError::Validation(_))
        ));
    }
}
