use egui::Color32;

pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(17, 17, 17);
pub const CELL_BORDER: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

pub const SNAKE_BODY: Color32 = Color32::from_rgb(0, 255, 0);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0, 200, 0);
pub const FOOD: Color32 = Color32::from_rgb(255, 0, 0);
pub const SHRINK_FOOD: Color32 = Color32::from_rgb(255, 165, 0);
pub const ENEMY: Color32 = Color32::from_rgb(128, 0, 128);

pub const OVERLAY_TEXT: Color32 = Color32::WHITE;
pub const MUTED_TEXT: Color32 = Color32::GRAY;
