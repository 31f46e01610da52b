use common::config::{Validate, check_range};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CELL_SIZE_PX: u32 = 20;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct WindowConfig {
    pub cell_size_px: u32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("window.cell_size_px", self.cell_size_px, 8..=64)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            cell_size_px: DEFAULT_CELL_SIZE_PX,
        }
    }
}
