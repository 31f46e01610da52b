use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE_HEADER, CONFIG_FILE_NAME};
use super::{GameConfig, LoggingConfig, WindowConfig};

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Config next to the executable unless `path` overrides it.
pub fn get_config_manager(path: Option<&Path>) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
    ConfigManager::new(
        FileContentConfigProvider::new(path),
        YamlConfigSerializer::with_header(CONFIG_FILE_HEADER),
    )
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_chase_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            game: GameConfig {
                field_width: 30,
                max_enemies: 5,
                shrink_food_enabled: false,
                ..GameConfig::default()
            },
            logging: LoggingConfig {
                verbose: true,
                use_prefix: false,
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager: ConfigManager<_, Config, _> = get_config_manager(Some(file_path.as_path()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(Path::new("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        let content = r#"
            game:
              field_width: 40
              tick_interval_ms: 100
        "#;
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider.set_config_content(content).unwrap();

        let manager: ConfigManager<_, Config, _> = ConfigManager::new(content_provider, YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();
        assert_eq!(config.game.field_width, 40);
        assert_eq!(config.game.tick_interval_ms, 100);
        assert_eq!(config.game.field_height, GameConfig::default().field_height);
        assert_eq!(config.window, WindowConfig::default());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              field_width: 5
              enemy_speed_factor: 0.7
            window:
              cell_size_px: 20
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> = ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }
}
