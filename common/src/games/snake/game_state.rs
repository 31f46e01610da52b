use crate::games::SessionRng;
use crate::{log, log_verbose};
use super::enemy::chase_step;
use super::settings::{SnakeSessionSettings, START_DIRECTION, START_HEAD, START_LENGTH};
use super::snake::Snake;
use super::snapshot::{GameOverSummary, GameSnapshot};
use super::spawner::find_free_cell;
use super::types::{DeathReason, Direction, FieldSize, FoodKind, GameStatus, Point};

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: Option<Point>,
    shrink_food: Option<Point>,
    enemies: Vec<Point>,
    score: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    tick_count: u64,
    field_size: FieldSize,
    settings: SnakeSessionSettings,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSessionSettings) -> Self {
        Self {
            snake: Snake::new(START_HEAD, START_DIRECTION, START_LENGTH),
            food: None,
            shrink_food: None,
            enemies: Vec::new(),
            score: 0,
            status: GameStatus::Idle,
            death_reason: None,
            tick_count: 0,
            field_size: settings.field_size(),
            settings,
        }
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(START_HEAD, START_DIRECTION, START_LENGTH);
        self.food = None;
        self.shrink_food = None;
        self.enemies.clear();
        self.score = 0;
        self.death_reason = None;
        self.tick_count = 0;
        self.status = GameStatus::Running;

        self.spawn_food(rng);

        log!(
            "New game on {}x{} field, seed {}",
            self.field_size.width,
            self.field_size.height,
            rng.seed()
        );
    }

    /// Queues a turn for the next tick. Reversals and input outside a running
    /// game are dropped.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Running || direction.is_opposite(&self.snake.direction) {
            return;
        }
        self.snake.pending_direction = Some(direction);
    }

    pub fn tick(&mut self, rng: &mut SessionRng) {
        if self.status != GameStatus::Running {
            return;
        }
        self.tick_count += 1;

        if let Err(reason) = self.try_move_snake(rng) {
            self.end_game(reason);
            return;
        }

        if self.score < self.settings.score_to_spawn_enemies {
            return;
        }

        self.try_spawn_enemy(rng);

        if let Err(reason) = self.move_enemies(rng) {
            self.end_game(reason);
        }
    }

    pub fn end_game(&mut self, reason: DeathReason) {
        if self.status == GameStatus::Over {
            return;
        }
        self.status = GameStatus::Over;
        self.death_reason = Some(reason);
        log!(
            "Game over after {} ticks: snake {}. Score: {}, length: {}",
            self.tick_count,
            reason,
            self.score,
            self.snake.len()
        );
    }

    fn try_move_snake(&mut self, rng: &mut SessionRng) -> Result<(), DeathReason> {
        self.snake.commit_pending_direction();

        let next_head = self
            .snake
            .head()
            .step(self.snake.direction, &self.field_size)
            .ok_or(DeathReason::WallCollision)?;

        // The tail has not moved yet, so stepping onto it is fatal too.
        if self.snake.contains(&next_head) {
            return Err(DeathReason::SelfCollision);
        }

        let length_before = self.snake.len();
        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            log!("Ate food at {}. Score: {}", next_head, self.score);
            self.spawn_food(rng);
        } else if self.settings.shrink_food_enabled && self.shrink_food == Some(next_head) {
            self.score = self.score.saturating_sub(1);
            log!("Ate shrink food at {}. Score: {}", next_head, self.score);
            self.spawn_food(rng);
            self.shrink_snake(length_before)?;
        } else {
            self.snake.pop_tail();
        }

        Ok(())
    }

    /// Net effect relative to the length before the move: two segments lost
    /// when longer than three, one when two or three, starvation at one.
    fn shrink_snake(&mut self, length_before: usize) -> Result<(), DeathReason> {
        let segments_to_drop = match length_before {
            0 | 1 => return Err(DeathReason::Starved),
            2 | 3 => 2,
            _ => 3,
        };
        for _ in 0..segments_to_drop {
            self.snake.pop_tail();
        }
        Ok(())
    }

    fn spawn_food(&mut self, rng: &mut SessionRng) {
        let kind = if self.settings.shrink_food_enabled && rng.chance(self.settings.shrink_food_chance) {
            FoodKind::Shrink
        } else {
            FoodKind::Normal
        };
        let other_food = match kind {
            FoodKind::Normal => self.shrink_food,
            FoodKind::Shrink => self.food,
        };

        let cell = find_free_cell(&self.field_size, rng, |p| {
            self.snake.contains(p) || self.enemies.contains(p) || other_food == Some(*p)
        });

        let Some(cell) = cell else {
            self.food = None;
            self.shrink_food = None;
            log!("No free cell left for food");
            return;
        };

        match kind {
            FoodKind::Normal => {
                self.food = Some(cell);
                self.shrink_food = None;
            }
            FoodKind::Shrink => {
                self.shrink_food = Some(cell);
                self.food = None;
            }
        }
        log_verbose!("{:?} food spawned at {}", kind, cell);
    }

    fn try_spawn_enemy(&mut self, rng: &mut SessionRng) {
        if !rng.chance(self.settings.enemy_spawn_probability)
            || self.enemies.len() >= self.settings.max_enemies
        {
            return;
        }

        let cell = find_free_cell(&self.field_size, rng, |p| {
            self.snake.contains(p)
                || self.food == Some(*p)
                || self.shrink_food == Some(*p)
                || self.enemies.contains(p)
        });

        match cell {
            Some(cell) => {
                self.enemies.push(cell);
                log!("Enemy spawned at {} ({}/{})", cell, self.enemies.len(), self.settings.max_enemies);
            }
            None => log_verbose!("No free cell left for an enemy"),
        }
    }

    fn move_enemies(&mut self, rng: &mut SessionRng) -> Result<(), DeathReason> {
        let head = self.snake.head();

        for index in 0..self.enemies.len() {
            if !rng.chance(self.settings.enemy_speed_factor) {
                continue;
            }

            let next = chase_step(self.enemies[index], head);
            self.enemies[index] = next;

            if self.snake.contains(&next) {
                log!("Enemy reached the snake at {}", next);
                return Err(DeathReason::EnemyCollision);
            }

            // Enemies do not eat; they push the food somewhere else.
            if self.food == Some(next) {
                self.spawn_food(rng);
            }
            if self.shrink_food == Some(next) {
                self.spawn_food(rng);
            }
        }

        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn shrink_food(&self) -> Option<Point> {
        self.shrink_food
    }

    pub fn enemies(&self) -> &[Point] {
        &self.enemies
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn field_size(&self) -> &FieldSize {
        &self.field_size
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            field_size: self.field_size.clone(),
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            shrink_food: self.shrink_food,
            enemies: self.enemies.clone(),
            score: self.score,
            status: self.status,
            death_reason: self.death_reason,
            tick: self.tick_count,
        }
    }

    pub fn summary(&self) -> GameOverSummary {
        GameOverSummary {
            score: self.score,
            snake_length: self.snake.len(),
            ticks: self.tick_count,
            reason: self.death_reason,
        }
    }

    #[cfg(test)]
    fn set_snake(&mut self, segments: Vec<Point>, direction: Direction) {
        self.snake = Snake::from_segments(segments, direction);
    }

    #[cfg(test)]
    fn place_food(&mut self, kind: FoodKind, cell: Point) {
        match kind {
            FoodKind::Normal => {
                self.food = Some(cell);
                self.shrink_food = None;
            }
            FoodKind::Shrink => {
                self.shrink_food = Some(cell);
                self.food = None;
            }
        }
    }

    #[cfg(test)]
    fn set_enemies(&mut self, enemies: Vec<Point>) {
        self.enemies = enemies;
    }

    #[cfg(test)]
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
