use std::path::Path;

use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::tictactoe::SessionSettings;

pub const CONFIG_FILE: &str = "tictactoe.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, SessionSettings, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}
