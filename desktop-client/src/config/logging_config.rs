use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Per-tick lines: spawns, food placement.
    pub verbose: bool,
    pub use_prefix: bool,
}
