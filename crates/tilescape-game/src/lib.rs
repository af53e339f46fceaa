//! Tilescape Game - Input, camera, and the per-frame streaming loop
//!
//! Turns held keys into camera motion, grows the world around the camera,
//! and hands the visible chunks to the renderer.

pub mod camera;
pub mod engine;
pub mod input;

pub use camera::{CameraConfig, CameraController};
pub use engine::{FrameStats, StreamingEngine};
pub use input::{InputAction, InputBindings, InputHandler, InputState, Modifiers};
