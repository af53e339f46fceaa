//! Camera system module
//!
//! Pans the world camera from held movement keys.

mod config;
mod controller;

pub use config::CameraConfig;
pub use controller::CameraController;
