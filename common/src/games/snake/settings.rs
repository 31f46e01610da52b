use std::time::Duration;

use crate::config::{Validate, check_probability, check_range};
use super::types::{Direction, FieldSize, Point};

pub const DEFAULT_FIELD_WIDTH: usize = 20;
pub const DEFAULT_FIELD_HEIGHT: usize = 20;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;
pub const DEFAULT_MAX_ENEMIES: usize = 3;
pub const DEFAULT_ENEMY_SPEED_FACTOR: f32 = 0.7;
pub const DEFAULT_SCORE_TO_SPAWN_ENEMIES: u32 = 1;
pub const DEFAULT_ENEMY_SPAWN_PROBABILITY: f32 = 0.01;
pub const DEFAULT_SHRINK_FOOD_CHANCE: f32 = 0.2;

pub const START_HEAD: Point = Point { x: 10, y: 10 };
pub const START_DIRECTION: Direction = Direction::Right;
pub const START_LENGTH: usize = 3;

pub const MIN_FIELD_SIDE: usize = 12;
pub const MAX_FIELD_SIDE: usize = 100;
pub const MAX_ENEMIES_LIMIT: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub tick_interval: Duration,
    pub max_enemies: usize,
    /// Probability that an enemy moves on a given tick.
    pub enemy_speed_factor: f32,
    pub score_to_spawn_enemies: u32,
    pub enemy_spawn_probability: f32,
    pub shrink_food_enabled: bool,
    pub shrink_food_chance: f32,
}

impl SnakeSessionSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            max_enemies: DEFAULT_MAX_ENEMIES,
            enemy_speed_factor: DEFAULT_ENEMY_SPEED_FACTOR,
            score_to_spawn_enemies: DEFAULT_SCORE_TO_SPAWN_ENEMIES,
            enemy_spawn_probability: DEFAULT_ENEMY_SPAWN_PROBABILITY,
            shrink_food_enabled: true,
            shrink_food_chance: DEFAULT_SHRINK_FOOD_CHANCE,
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("field_width", self.field_width, MIN_FIELD_SIDE..=MAX_FIELD_SIDE)?;
        check_range("field_height", self.field_height, MIN_FIELD_SIDE..=MAX_FIELD_SIDE)?;
        check_range(
            "tick_interval_ms",
            self.tick_interval.as_millis() as u64,
            50..=1000,
        )?;
        check_range("max_enemies", self.max_enemies, 0..=MAX_ENEMIES_LIMIT)?;
        check_probability("enemy_speed_factor", self.enemy_speed_factor)?;
        check_probability("enemy_spawn_probability", self.enemy_spawn_probability)?;
        check_probability("shrink_food_chance", self.shrink_food_chance)?;
        Ok(())
    }
}
