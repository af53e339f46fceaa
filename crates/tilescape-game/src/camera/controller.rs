//! Camera controller that pans from held keys

use glam::Vec2;

use crate::input::{InputAction, InputState};

use super::CameraConfig;

/// Turns held movement keys into a per-frame camera offset
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    /// Configuration
    pub config: CameraConfig,
}

impl CameraController {
    /// Create a new camera controller
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create a camera controller with custom config
    pub fn with_config(config: CameraConfig) -> Self {
        Self { config }
    }

    /// Pixels per frame for the current modifier state
    pub fn speed(&self, input: &InputState) -> f32 {
        if input.modifiers.shift {
            self.config.speed + self.config.run_bonus
        } else {
            self.config.speed
        }
    }

    /// Camera offset for this frame.
    ///
    /// Each held direction contributes `speed` along its axis. Opposite keys
    /// cancel and diagonals are not normalized.
    pub fn frame_delta(&self, input: &InputState) -> Vec2 {
        let speed = self.speed(input);
        let mut delta = Vec2::ZERO;

        if input.is_held(InputAction::MoveUp) {
            delta.y -= speed;
        }
        if input.is_held(InputAction::MoveLeft) {
            delta.x -= speed;
        }
        if input.is_held(InputAction::MoveDown) {
            delta.y += speed;
        }
        if input.is_held(InputAction::MoveRight) {
            delta.x += speed;
        }

        delta
    }
}
