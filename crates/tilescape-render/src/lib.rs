//! Tilescape Render - Draws visible tiles onto a 2D surface
//!
//! The [`Surface`] trait is the display collaborator. [`FrameBuffer`] is a
//! CPU implementation of it whose pixels a window can present directly.

pub mod framebuffer;
pub mod renderer;
pub mod surface;

pub use framebuffer::FrameBuffer;
pub use renderer::{RenderStats, TileRenderer};
pub use surface::Surface;
