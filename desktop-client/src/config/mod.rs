mod game_config;
mod logging_config;
mod main_config;
mod window_config;

pub use game_config::GameConfig;
pub use logging_config::LoggingConfig;
pub use main_config::{Config, get_config_manager};
pub use window_config::WindowConfig;
