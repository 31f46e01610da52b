pub const EVENT_LOG_SIZE: usize = 8;

pub const CONFIG_FILE_NAME: &str = "snake_chase_config.yaml";
pub const CONFIG_FILE_HEADER: &str = "Snake Chase settings. Delete this file to restore defaults.";

pub const HUD_HEIGHT: f32 = 140.0;
pub const WINDOW_PADDING: f32 = 40.0;
