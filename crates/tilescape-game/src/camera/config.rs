//! Camera configuration

use serde::{Deserialize, Serialize};

/// Camera configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Pixels moved per frame while a movement key is held
    pub speed: f32,
    /// Extra pixels per frame while the run modifier is held
    pub run_bonus: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            run_bonus: 2.0,
        }
    }
}
