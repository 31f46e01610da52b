mod enemy;
mod game_state;
mod session;
mod settings;
mod snake;
mod snapshot;
mod spawner;
mod types;

pub use enemy::chase_step;
pub use game_state::SnakeGameState;
pub use session::{SessionCommand, SnakeSession};
pub use settings::*;
pub use snake::Snake;
pub use snapshot::{GameOverSummary, GameSnapshot};
pub use spawner::{MAX_SPAWN_ATTEMPTS, find_free_cell};
pub use types::{DeathReason, Direction, FieldSize, FoodKind, GameStatus, Point};
