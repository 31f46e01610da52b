use super::types::{DeathReason, FieldSize, GameStatus, Point};

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub field_size: FieldSize,
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub shrink_food: Option<Point>,
    pub enemies: Vec<Point>,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverSummary {
    pub score: u32,
    pub snake_length: usize,
    pub ticks: u64,
    pub reason: Option<DeathReason>,
}
