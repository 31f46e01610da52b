use std::time::Duration;

use common::config::Validate;
use common::games::snake::{
    DEFAULT_ENEMY_SPAWN_PROBABILITY, DEFAULT_ENEMY_SPEED_FACTOR, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH,
    DEFAULT_MAX_ENEMIES, DEFAULT_SCORE_TO_SPAWN_ENEMIES, DEFAULT_SHRINK_FOOD_CHANCE, DEFAULT_TICK_INTERVAL_MS,
    SnakeSessionSettings,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
    pub max_enemies: u32,
    pub enemy_speed_factor: f32,
    pub score_to_spawn_enemies: u32,
    pub enemy_spawn_probability: f32,
    pub shrink_food_enabled: bool,
    pub shrink_food_chance: f32,
}

impl GameConfig {
    pub fn to_session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            field_width: self.field_width as usize,
            field_height: self.field_height as usize,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
            max_enemies: self.max_enemies as usize,
            enemy_speed_factor: self.enemy_speed_factor,
            score_to_spawn_enemies: self.score_to_spawn_enemies,
            enemy_spawn_probability: self.enemy_spawn_probability,
            shrink_food_enabled: self.shrink_food_enabled,
            shrink_food_chance: self.shrink_food_chance,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_session_settings()
            .validate()
            .map_err(|e| format!("game: {}", e))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH as u32,
            field_height: DEFAULT_FIELD_HEIGHT as u32,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS as u32,
            max_enemies: DEFAULT_MAX_ENEMIES as u32,
            enemy_speed_factor: DEFAULT_ENEMY_SPEED_FACTOR,
            score_to_spawn_enemies: DEFAULT_SCORE_TO_SPAWN_ENEMIES,
            enemy_spawn_probability: DEFAULT_ENEMY_SPAWN_PROBABILITY,
            shrink_food_enabled: true,
            shrink_food_chance: DEFAULT_SHRINK_FOOD_CHANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_session_defaults() {
        assert_eq!(GameConfig::default().to_session_settings(), SnakeSessionSettings::default());
    }

    #[test]
    fn test_rejects_huge_field() {
        let config = GameConfig {
            field_height: 500,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("field_height"), "{}", err);
    }

    #[test]
    fn test_rejects_too_many_enemies() {
        let config = GameConfig {
            max_enemies: 21,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
