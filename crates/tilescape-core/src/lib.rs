//! Tilescape Core - Core types and utilities for the Tilescape viewer
//!
//! This crate provides the foundational types used throughout the viewer:
//! - Mathematical primitives (re-exported from glam)
//! - Colors for flat tile fills
//! - Pixel-space rectangles and the viewport they are tested against

pub mod types;

pub use glam::{DVec2, Vec2};
pub use types::{Color, PixelRect, Viewport};
